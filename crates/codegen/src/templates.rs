use std::collections::HashMap;

/// Substitute `{{key}}` placeholders in a single pass.
///
/// Inserted values are never rescanned, so a value that happens to contain
/// `{{...}}` is copied through literally. Unknown placeholders are kept.
pub fn render_template(template: &str, context: &HashMap<&str, String>) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        result.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        match after.find("}}") {
            Some(end) => {
                let key = &after[..end];
                match context.get(key) {
                    Some(value) => result.push_str(value),
                    None => {
                        result.push_str("{{");
                        result.push_str(key);
                        result.push_str("}}");
                    }
                }
                rest = &after[end + 2..];
            }
            None => {
                result.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    result.push_str(rest);
    result
}

pub static ENUM_TEMPLATE: &str = r#"{{package}}public enum {{name}} {
{{members}};

    private final int code;
    private final String description;

    {{name}}(int code, String description) {
        this.code = code;
        this.description = description;
    }

    public int getCode() {
        return code;
    }

    public String getDescription() {
        return description;
    }
}
"#;
