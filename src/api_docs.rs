use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::plan::generate_plan,
    ),
    tags(
        (name = "tourplan", description = "TourPlan API")
    )
)]
pub struct ApiDoc;
