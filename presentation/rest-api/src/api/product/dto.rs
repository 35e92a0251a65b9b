use poem_openapi::Object;
use serde_json::Value;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    /// Identifier of the product to delete (string or number)
    pub product_id: Option<Value>,
}

impl DeleteProductRequest {
    /// Textual form of the id; `None` for absent, null or non-scalar values.
    pub fn product_id(&self) -> Option<String> {
        match &self.product_id {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    /// Confirmation message
    pub message: String,
}
