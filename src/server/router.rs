//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger
//! UI is served at `/api/docs`.

use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Requests are traced
/// through tower-http's [`TraceLayer`].
///
/// # Returns
/// An Axum `Router<AppState>` with all routes and middleware, ready for `with_state`.
///
/// # Example
/// ```ignore
/// let app_state = build_app_state(&config, db)?;
/// let router = routes().with_state(app_state);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "DREAM Tool", description = "DREAM Tool energy planning API"),
        modifiers(&BearerSecurity),
        tags(
            (name = controller::facility::FACILITY_TAG, description = "Health facilities"),
            (name = controller::survey::SURVEY_TAG, description = "Facility surveys and versions"),
            (name = controller::techno_economic::TECHNO_ECONOMIC_TAG, description = "PV versus diesel analyses"),
            (name = controller::solar_system::SOLAR_SYSTEM_TAG, description = "Installed solar systems"),
            (name = controller::maintenance::MAINTENANCE_TAG, description = "Maintenance records and scheduling"),
            (name = controller::whatsapp::WHATSAPP_TAG, description = "WhatsApp messaging"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::facility::list_facilities,
            controller::facility::create_facility
        ))
        .routes(routes!(controller::facility::get_facility))
        .routes(routes!(
            controller::survey::get_survey,
            controller::survey::create_survey,
            controller::survey::update_survey
        ))
        .routes(routes!(controller::survey::list_survey_versions))
        .routes(routes!(
            controller::techno_economic::calculate,
            controller::techno_economic::get_latest_analysis
        ))
        .routes(routes!(
            controller::solar_system::list_solar_systems,
            controller::solar_system::create_solar_system
        ))
        .routes(routes!(
            controller::solar_system::get_solar_system,
            controller::solar_system::update_solar_system,
            controller::solar_system::delete_solar_system
        ))
        .routes(routes!(
            controller::maintenance::list_maintenance_records,
            controller::maintenance::create_maintenance_record
        ))
        .routes(routes!(controller::maintenance::update_maintenance_status))
        .routes(routes!(controller::maintenance::get_schedule))
        .routes(routes!(controller::maintenance::get_analytics))
        .routes(routes!(controller::maintenance::optimize_schedule))
        .routes(routes!(controller::maintenance::optimize_all_schedules))
        .routes(routes!(controller::whatsapp::send_message))
        .routes(routes!(
            controller::whatsapp::verify_webhook,
            controller::whatsapp::receive_webhook
        ))
        .split_for_parts();

    routes
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
