// Request planning module: pure construction of request descriptors
// from user-entered tokens, plus the status-to-message mapping for
// DELETE. Nothing in here touches the terminal or the network, so the
// whole decision tree is unit-testable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP methods the CLI supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Parse a user-entered method token, case-insensitively. Returns
    /// `None` for anything that is not one of the four supported
    /// methods; the caller prints an "invalid" message and skips the
    /// network entirely.
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_uppercase().as_str() {
            "GET" => Some(Method::Get),
            "POST" => Some(Method::Post),
            "PATCH" => Some(Method::Patch),
            "DELETE" => Some(Method::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// Resources that accept POST. Other methods pass the resource string
/// through to the API untouched; only the POST flow needs to know
/// which field set to prompt for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostResource {
    Users,
    Posts,
}

impl PostResource {
    pub fn parse(resource: &str) -> Option<Self> {
        match resource.trim().to_lowercase().as_str() {
            "users" => Some(PostResource::Users),
            "posts" => Some(PostResource::Posts),
            _ => None,
        }
    }
}

/// Fields collected when creating a user.
#[derive(Serialize, Deserialize, Debug)]
pub struct NewUser {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub gender: String,
}

/// Fields collected when creating a post.
#[derive(Serialize, Deserialize, Debug)]
pub struct NewPost {
    pub post_id: String,
    pub user_id: String,
    pub post_text: String,
    pub post_date: String,
    pub likes: String,
    pub comments: String,
    pub hashtags: String,
    pub location: String,
    pub post_image: String,
}

/// One user-specified operation, ready to hand to the dispatcher.
/// Built fresh per run and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub resource: String,
    pub method: Method,
    pub id: Option<String>,
    pub payload: Option<Value>,
}

impl RequestDescriptor {
    pub fn get_all(resource: &str) -> Self {
        RequestDescriptor {
            resource: resource.trim().to_string(),
            method: Method::Get,
            id: None,
            payload: None,
        }
    }

    pub fn get_by_id(resource: &str, id: &str) -> Self {
        RequestDescriptor {
            resource: resource.trim().to_string(),
            method: Method::Get,
            id: Some(id.trim().to_string()),
            payload: None,
        }
    }

    pub fn delete(resource: &str, id: &str) -> Self {
        RequestDescriptor {
            resource: resource.trim().to_string(),
            method: Method::Delete,
            id: Some(id.trim().to_string()),
            payload: None,
        }
    }

    /// PATCH against the resource collection with a field map zipped
    /// from two comma-separated lists.
    pub fn patch(resource: &str, keys_csv: &str, values_csv: &str) -> Self {
        RequestDescriptor {
            resource: resource.trim().to_string(),
            method: Method::Patch,
            id: None,
            payload: Some(zip_fields(keys_csv, values_csv)),
        }
    }

    /// POST a serializable payload (NewUser or NewPost) to the
    /// resource collection.
    pub fn create<T: Serialize>(resource: &str, payload: &T) -> anyhow::Result<Self> {
        let payload = serde_json::to_value(payload)?;
        Ok(RequestDescriptor {
            resource: resource.trim().to_string(),
            method: Method::Post,
            id: None,
            payload: Some(payload),
        })
    }

    /// Path relative to the base URL: `/{resource}` or
    /// `/{resource}/{id}` when an ID is set.
    pub fn path(&self) -> String {
        match &self.id {
            Some(id) => format!("/{}/{}", self.resource, id),
            None => format!("/{}", self.resource),
        }
    }

    /// Full URL against a base. A trailing slash on the base is
    /// stripped so joins never produce `//`.
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }
}

/// Zip two comma-separated lists into a JSON object, trimming each
/// key and value. Zipping stops at the shorter list, so a missing
/// value drops its key rather than misaligning the rest.
pub fn zip_fields(keys_csv: &str, values_csv: &str) -> Value {
    let mut fields = Map::new();
    for (key, value) in keys_csv.split(',').zip(values_csv.split(',')) {
        fields.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
    }
    Value::Object(fields)
}

/// Human-readable outcome of a DELETE, selected by HTTP status code.
pub fn delete_status_message(id: &str, status: u16) -> String {
    match status {
        204 => format!("Resource with ID {id} has been successfully deleted."),
        403 => format!(
            "Error deleting the resource with ID {id}: Forbidden. You don't have sufficient permissions."
        ),
        404 => format!(
            "Error deleting the resource with ID {id}: Not Found. No resource found with the specified ID."
        ),
        405 => format!(
            "Error deleting the resource with ID {id}: Method Not Allowed. The API does not support the DELETE method for this resource."
        ),
        409 => format!(
            "Error deleting the resource with ID {id}: Conflict. The resource is in a conflicting state.\nPlease resolve the conflict with the API."
        ),
        _ => format!("Error deleting the resource with ID {id}: Unexpected error occurred."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn method_parse_is_case_insensitive() {
        assert_eq!(Method::parse("delete"), Some(Method::Delete));
        assert_eq!(Method::parse("Get"), Some(Method::Get));
        assert_eq!(Method::parse(" PATCH "), Some(Method::Patch));
        assert_eq!(Method::parse("post"), Some(Method::Post));
    }

    #[test]
    fn unsupported_method_token_parses_to_none() {
        assert_eq!(Method::parse("PUT"), None);
        assert_eq!(Method::parse("frobnicate"), None);
        assert_eq!(Method::parse(""), None);
    }

    #[test]
    fn post_resource_parse() {
        assert_eq!(PostResource::parse("users"), Some(PostResource::Users));
        assert_eq!(PostResource::parse("Posts"), Some(PostResource::Posts));
        assert_eq!(PostResource::parse("comments"), None);
    }

    #[test]
    fn get_all_targets_the_collection() {
        let req = RequestDescriptor::get_all("users");
        assert_eq!(req.method, Method::Get);
        assert_eq!(req.url("http://127.0.0.1:3000"), "http://127.0.0.1:3000/users");
        assert!(req.payload.is_none());
    }

    #[test]
    fn get_by_id_appends_the_id_segment() {
        let req = RequestDescriptor::get_by_id("users", "5");
        assert_eq!(req.url("http://127.0.0.1:3000"), "http://127.0.0.1:3000/users/5");
    }

    #[test]
    fn delete_trims_the_entered_id() {
        let req = RequestDescriptor::delete("posts", " 12 \n");
        assert_eq!(req.id.as_deref(), Some("12"));
        assert_eq!(req.path(), "/posts/12");
    }

    #[test]
    fn trailing_slash_on_base_is_stripped() {
        let req = RequestDescriptor::get_all("posts");
        assert_eq!(req.url("http://127.0.0.1:3000/"), "http://127.0.0.1:3000/posts");
    }

    #[test]
    fn patch_zips_keys_and_values() {
        let req = RequestDescriptor::patch("users", "a,b", "1,2");
        assert_eq!(req.payload, Some(json!({"a": "1", "b": "2"})));
    }

    #[test]
    fn patch_trims_tokens() {
        let req = RequestDescriptor::patch("users", " first_name , email ", " Ada , ada@b.com ");
        assert_eq!(
            req.payload,
            Some(json!({"first_name": "Ada", "email": "ada@b.com"}))
        );
    }

    #[test]
    fn patch_with_short_value_list_drops_the_extra_key() {
        let req = RequestDescriptor::patch("users", "a,b,c", "1,2");
        assert_eq!(req.payload, Some(json!({"a": "1", "b": "2"})));
    }

    #[test]
    fn create_user_carries_exactly_the_entered_object() {
        let user = NewUser {
            id: "1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            email: "a@b.com".into(),
            gender: "M".into(),
        };
        let req = RequestDescriptor::create("users", &user).unwrap();
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.path(), "/users");
        assert_eq!(
            req.payload,
            Some(json!({
                "id": "1",
                "first_name": "A",
                "last_name": "B",
                "email": "a@b.com",
                "gender": "M",
            }))
        );
    }

    #[test]
    fn delete_message_for_each_known_status() {
        assert_eq!(
            delete_status_message("7", 204),
            "Resource with ID 7 has been successfully deleted."
        );
        assert_eq!(
            delete_status_message("7", 403),
            "Error deleting the resource with ID 7: Forbidden. You don't have sufficient permissions."
        );
        assert_eq!(
            delete_status_message("7", 404),
            "Error deleting the resource with ID 7: Not Found. No resource found with the specified ID."
        );
        assert_eq!(
            delete_status_message("7", 405),
            "Error deleting the resource with ID 7: Method Not Allowed. The API does not support the DELETE method for this resource."
        );
        assert_eq!(
            delete_status_message("7", 409),
            "Error deleting the resource with ID 7: Conflict. The resource is in a conflicting state.\nPlease resolve the conflict with the API."
        );
    }

    #[test]
    fn delete_message_falls_back_to_generic() {
        assert_eq!(
            delete_status_message("7", 500),
            "Error deleting the resource with ID 7: Unexpected error occurred."
        );
        assert_eq!(
            delete_status_message("7", 200),
            "Error deleting the resource with ID 7: Unexpected error occurred."
        );
    }
}
