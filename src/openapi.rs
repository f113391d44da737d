//! OpenAPI document for the HTTP surface, served at /openapi.json.
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Chat Service API", description = "Two-party chats, message history and attachment uploads"),
    paths(
        crate::handlers::chats::list_chats,
        crate::handlers::messages::get_messages,
        crate::handlers::messages::send_message,
        crate::handlers::uploads::upload_file,
    ),
    components(schemas(
        crate::models::ChatSummary,
        crate::models::MessageView,
        crate::models::PeerInfo,
        crate::handlers::chats::ListChatsResponse,
        crate::handlers::messages::MessagesResponse,
        crate::handlers::messages::SendMessageRequest,
        crate::handlers::messages::SendMessageResponse,
        crate::handlers::uploads::UploadRequest,
        crate::handlers::uploads::UploadResponse,
    ))
)]
pub struct ApiDoc;
