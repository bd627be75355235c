//! User account listing tools.

use friday_client::ApiRequest;
use friday_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::require_non_empty;
use crate::dispatch::ToolInput;

/// Input parameters for list_user_api_keys.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListUserApiKeysParams {
    /// Identifier of the user whose keys to list.
    pub user_id: String,
}

impl ToolInput for ListUserApiKeysParams {
    fn validate(&self) -> Result<(), Error> {
        require_non_empty("user_id", &self.user_id)
    }

    fn into_request(self) -> ApiRequest {
        ApiRequest::new().path_param("user_id", self.user_id.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Reply, StubTransport, client};
    use crate::tools::catalog;
    use friday_client::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_user_id_is_a_path_segment() {
        let transport = StubTransport::new(Reply::json(200, json!({ "keys": [] })));
        let spec = catalog().into_iter().find(|spec| spec.name == "list_user_api_keys").unwrap();
        let args = json!({ "user_id": "team/alpha" }).as_object().cloned();

        let result = spec.invoke(&client(transport.clone()), args).await;
        assert!(!result.is_error.unwrap_or(false));

        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url.path(), "/users/team%2Falpha/api-keys");
        assert!(sent.body.is_none());
    }

    #[test]
    fn test_blank_user_id_rejected() {
        let params = ListUserApiKeysParams { user_id: "".into() };
        assert!(params.validate().is_err());
    }
}
