//! Post handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::PostId;
use blog_shared::ErrorResponse;
use blog_shared::dto::{CreatePostForm, PostCreatedResponse, PostResponse, PostSummaryResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// Retorna a lista de artigos de blog salvos.
///
/// GET /posts
#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "Lista de artigos de blog retornada com sucesso.", body = [PostSummaryResponse]),
        (status = 500, description = "Falha de armazenamento.", body = ErrorResponse)
    )
)]
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostSummaryResponse> = state
        .posts
        .list_posts()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// Retorna um blog post pelo ID.
///
/// GET /blog/{id}
#[utoipa::path(
    get,
    path = "/blog/{id}",
    tag = "posts",
    params(("id" = i32, Path, description = "ID do blog post")),
    responses(
        (status = 200, description = "Dados do blog post.", body = PostResponse),
        (status = 404, description = "Não encontrado.", body = ErrorResponse)
    )
)]
pub async fn get_post(
    state: web::Data<AppState>,
    id: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.posts.get_post(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// Adiciona um novo blog post ao banco de dados.
///
/// POST /blog/add
#[utoipa::path(
    post,
    path = "/blog/add",
    tag = "posts",
    request_body(content = CreatePostForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Artigo de blog adicionado com sucesso.", body = PostCreatedResponse),
        (status = 400, description = "Dados inválidos fornecidos.", body = ErrorResponse),
        (status = 500, description = "Falha de armazenamento.", body = ErrorResponse)
    )
)]
pub async fn add_post(
    state: web::Data<AppState>,
    form: web::Form<CreatePostForm>,
) -> AppResult<HttpResponse> {
    let CreatePostForm {
        title,
        body,
        author,
    } = form.into_inner();

    let created = state.posts.create_post(title, body, author).await?;
    tracing::info!(post_id = created.id, "Post created");

    Ok(HttpResponse::Created().json(PostCreatedResponse::from(created)))
}
