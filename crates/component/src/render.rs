use quick_xml::escape::escape;
use quire_types::{CHILDREN_KEY, PropMap};
use serde_json::Value;

/// Substitutes `{{ key }}` placeholders in `template` with XML-escaped prop
/// values, in a single left-to-right pass over the template.
///
/// All substitutions come from one fixed snapshot of `props` and substituted
/// text is never rescanned, so a prop value that happens to contain a
/// placeholder token cannot trigger a second substitution. Placeholders with
/// no matching key are left verbatim (absence is the validator's concern,
/// not a render-time error). The reserved `children` key is structural and
/// never substituted, even if a caller passes it through.
pub fn render(template: &str, props: &PropMap) -> String {
    if props.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(close) = rest[start + 2..].find("}}") else {
            // Unterminated token, emit the remainder untouched.
            break;
        };
        let key = rest[start + 2..start + 2 + close].trim();
        let token_end = start + 2 + close + 2;

        out.push_str(&rest[..start]);
        match props.get(key) {
            Some(value) if key != CHILDREN_KEY => {
                let text = stringify(value);
                out.push_str(&escape(text.as_str()));
            }
            _ => out.push_str(&rest[start..token_end]),
        }
        rest = &rest[token_end..];
    }

    out.push_str(rest);
    out
}

/// Stringifies a prop value for insertion: strings render bare, everything
/// else as its JSON text.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props(value: serde_json::Value) -> PropMap {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn substitutes_multiple_placeholders() {
        let result = render(
            "Hello {{ name }}, welcome to {{ place }}!",
            &props(json!({ "name": "World", "place": "Quire" })),
        );
        assert_eq!(result, "Hello World, welcome to Quire!");
    }

    #[test]
    fn escapes_xml_metacharacters() {
        let result = render(
            "Title: {{ title }}",
            &props(json!({ "title": "Test & Demo <Example>" })),
        );
        assert_eq!(result, "Title: Test &amp; Demo &lt;Example&gt;");
    }

    #[test]
    fn escaped_value_round_trips_as_text_content() {
        let rendered = render("{{x}}", &props(json!({ "x": "<a&b>" })));
        // The escaped form must decode back to the original value.
        assert_eq!(
            quick_xml::escape::unescape(&rendered).unwrap(),
            "<a&b>"
        );
        // And it must parse as plain text content, never as live markup.
        let wrapped = format!("<t>{rendered}</t>");
        let mut reader = quick_xml::Reader::from_str(&wrapped);
        let mut elements = 0;
        loop {
            match reader.read_event().unwrap() {
                quick_xml::events::Event::Start(_) => elements += 1,
                quick_xml::events::Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(elements, 1, "escaped value must not introduce elements");
    }

    #[test]
    fn unmatched_placeholders_are_left_verbatim() {
        let result = render(
            "{{ known }} and {{ unknown }}",
            &props(json!({ "known": "yes" })),
        );
        assert_eq!(result, "yes and {{ unknown }}");
    }

    #[test]
    fn substituted_value_containing_token_is_not_resubstituted() {
        let result = render(
            "{{ a }}{{ b }}",
            &props(json!({ "a": "{{ b }}", "b": "B" })),
        );
        // "a" expands to the literal token text, which must survive as-is.
        assert_eq!(result, "{{ b }}B");
    }

    #[test]
    fn whitespace_around_key_is_tolerated() {
        let result = render("{{x}} {{  x  }}", &props(json!({ "x": "v" })));
        assert_eq!(result, "v v");
    }

    #[test]
    fn children_key_is_never_substituted() {
        let result = render(
            "{{ children }}",
            &props(json!({ "children": [ { "component": "X" } ] })),
        );
        assert_eq!(result, "{{ children }}");
    }

    #[test]
    fn non_string_values_render_as_json_text() {
        let result = render(
            "{{ n }}/{{ b }}",
            &props(json!({ "n": 42, "b": true })),
        );
        assert_eq!(result, "42/true");
    }

    #[test]
    fn empty_props_returns_template_unchanged() {
        let result = render("<w:p>{{ x }}</w:p>", &PropMap::new());
        assert_eq!(result, "<w:p>{{ x }}</w:p>");
    }
}
