//! OpenAPI document generated from the handler annotations, plus the
//! browsable Swagger UI that renders it.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use blog_shared::ErrorResponse;
use blog_shared::dto::{CreatePostForm, PostCreatedResponse, PostResponse, PostSummaryResponse};

use super::posts;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pedro's API",
        description = "Pedro's blog engine demonstration",
        version = "0.0.1"
    ),
    paths(posts::list_posts, posts::get_post, posts::add_post),
    components(schemas(
        CreatePostForm,
        PostSummaryResponse,
        PostResponse,
        PostCreatedResponse,
        ErrorResponse
    )),
    tags((name = "posts", description = "Artigos de blog"))
)]
pub struct ApiDoc;

/// Path of the raw OpenAPI document.
pub const OPENAPI_URL: &str = "/apispec_1.json";

/// Swagger UI under `/apidocs/`, serving the document at [`OPENAPI_URL`].
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/apidocs/{_:.*}").url(OPENAPI_URL, ApiDoc::openapi())
}
