//! HTML rendering of the proposal form page

use crate::bound::BoundField;
use crate::store::FormStore;
use proposal_forms::Widget;

/// Render the whole page for the current state of the store.
///
/// The output is a `<div class="proposal-form">` containing the heading,
/// the success banner after an accepted submission, and the form itself.
/// Widgets carry `class="field-invalid"` and are followed by a
/// `<p class="field-error">` while their error is visible.
pub fn render_page(store: &FormStore) -> String {
	let mut html = String::from("<div class=\"proposal-form\">\n");
	html.push_str("<h2>Submit Your Proposal</h2>\n");

	if store.submitted() {
		html.push_str(
			"<div class=\"success-banner\">Thank you! Your proposal has been submitted successfully.</div>\n",
		);
	}

	html.push_str("<form method=\"post\" novalidate>\n");
	for bound in store.bound_fields() {
		render_field(&mut html, &bound);
	}
	html.push_str("<button type=\"submit\">Submit</button>\n");
	html.push_str("</form>\n");
	html.push_str("</div>");
	html
}

fn render_field(html: &mut String, bound: &BoundField<'_>) {
	html.push_str("<div class=\"form-field\">\n");

	match bound.widget() {
		Widget::Select => render_select(html, bound),
		Widget::FileInput => render_file_input(html, bound),
		_ => render_text_input(html, bound),
	}

	if let Some(error) = bound.visible_error() {
		html.push_str(&format!(
			"<p class=\"field-error\">{}</p>\n",
			html_escape(error)
		));
	}

	html.push_str("</div>\n");
}

fn render_label(html: &mut String, bound: &BoundField<'_>) {
	if let Some(label) = bound.label() {
		html.push_str(&format!(
			r#"<label for="{}">{}</label>"#,
			bound.id_for_label(),
			html_escape(label)
		));
		html.push('\n');
	}
}

fn render_text_input(html: &mut String, bound: &BoundField<'_>) {
	render_label(html, bound);

	let mut input = format!(
		r#"<input type="{}" id="{}" name="{}""#,
		input_type(bound.widget()),
		bound.id_for_label(),
		bound.html_name()
	);

	if let Some(value) = bound.value()
		&& !value.is_empty()
	{
		input.push_str(&format!(r#" value="{}""#, html_escape(value)));
	}

	if let Some(placeholder) = bound.placeholder() {
		input.push_str(&format!(r#" placeholder="{}""#, html_escape(placeholder)));
	}

	if bound.has_visible_error() {
		input.push_str(r#" class="field-invalid""#);
	}

	input.push_str(" />");
	html.push_str(&input);
	html.push('\n');
}

fn render_select(html: &mut String, bound: &BoundField<'_>) {
	render_label(html, bound);

	let mut select = format!(
		r#"<select id="{}" name="{}""#,
		bound.id_for_label(),
		bound.html_name()
	);

	if bound.has_visible_error() {
		select.push_str(r#" class="field-invalid""#);
	}

	select.push('>');

	if let Some(empty_label) = bound.empty_label() {
		select.push_str(&format!(
			r#"<option value="">{}</option>"#,
			html_escape(empty_label)
		));
	}

	for (choice_value, choice_label) in bound.choices() {
		select.push_str("<option");
		select.push_str(&format!(r#" value="{}""#, html_escape(choice_value)));

		if Some(choice_value.as_str()) == bound.value() {
			select.push_str(" selected");
		}

		select.push('>');
		select.push_str(&html_escape(choice_label));
		select.push_str("</option>");
	}

	select.push_str("</select>");
	html.push_str(&select);
	html.push('\n');
}

// The native file input is kept but visually replaced: a styled label
// triggers the picker and a span echoes the chosen file name.
fn render_file_input(html: &mut String, bound: &BoundField<'_>) {
	if let Some(label) = bound.label() {
		html.push_str(&format!("<label>{}</label>", html_escape(label)));
		html.push('\n');
	}

	html.push_str("<div class=\"file-upload\">");
	html.push_str(&format!(
		r#"<label class="file-trigger" for="{}">Choose File</label>"#,
		bound.id_for_label()
	));

	let file_name = match bound.file() {
		Some(file) => html_escape(&file.name),
		None => "No file chosen".to_string(),
	};
	html.push_str(&format!(r#"<span class="file-name">{file_name}</span>"#));

	let mut input = format!(
		r#"<input type="file" id="{}" name="{}""#,
		bound.id_for_label(),
		bound.html_name()
	);

	if let Some(accept) = bound.accept() {
		input.push_str(&format!(r#" accept="{}""#, html_escape(accept)));
	}

	if bound.has_visible_error() {
		input.push_str(r#" class="field-invalid""#);
	}

	input.push_str(" />");
	html.push_str(&input);
	html.push_str("</div>\n");
}

fn input_type(widget: &Widget) -> &'static str {
	match widget {
		Widget::EmailInput => "email",
		Widget::TelInput => "tel",
		Widget::UrlInput => "url",
		_ => "text",
	}
}

/// Escape a string for use in HTML text and attribute values.
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}
