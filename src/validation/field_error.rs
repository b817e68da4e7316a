use serde::Serialize;

use super::error_map::ValidationErrors;

/// One form field together with its error text rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub name: String,
    pub message: String,
}

impl ValidationErrors {
    /// Flatten into display records, one per field in insertion order.
    ///
    /// A field whose entry holds no messages still produces a record, with
    /// an empty `message` rather than being dropped.
    pub fn to_field_errors(&self) -> Vec<FieldError> {
        self.iter()
            .map(|(name, messages)| FieldError {
                name: name.to_string(),
                message: messages.join(", "),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_keeps_insertion_order_and_empty_entries() {
        let errors: ValidationErrors =
            serde_json::from_str(r#"{"email":["Required"],"password":[]}"#).unwrap();

        let fields = errors.to_field_errors();
        assert_eq!(fields.len(), 2);
        assert_eq!(
            fields[0],
            FieldError {
                name: "email".to_string(),
                message: "Required".to_string(),
            }
        );
        assert_eq!(
            fields[1],
            FieldError {
                name: "password".to_string(),
                message: "".to_string(),
            }
        );
    }

    #[test]
    fn test_transform_joins_multiple_messages() {
        let errors: ValidationErrors =
            serde_json::from_str(r#"{"email":["Required","Invalid format"]}"#).unwrap();

        let fields = errors.to_field_errors();
        assert_eq!(fields[0].message, "Required, Invalid format");
    }

    #[test]
    fn test_field_error_serializes_for_display() {
        let field = FieldError {
            name: "email".to_string(),
            message: "Required".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"name":"email","message":"Required"}"#
        );
    }

    #[test]
    fn test_transform_is_pure() {
        let errors: ValidationErrors =
            serde_json::from_str(r#"{"email":["Required"],"password":[]}"#).unwrap();
        assert_eq!(errors.to_field_errors(), errors.to_field_errors());
    }
}
