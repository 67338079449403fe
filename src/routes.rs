use axum::Router;
use axum::routing::{delete, get, post, put};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::controllers::healthcheck;
use crate::controllers::image::{
	create_image,
	delete_image,
	get_image,
	update_image,
};
use crate::controllers::restaurant::{
	create_restaurant,
	delete_restaurant,
	get_restaurant,
	update_restaurant,
};

/// Get the app router
pub fn get_app_router(state: AppState) -> Router {
	let api_routes = Router::new()
		.merge(restaurant_routes())
		.merge(image_routes());

	Router::new()
		.route("/healthcheck", get(healthcheck))
		.nest("/api", api_routes)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(TimeoutLayer::new(state.config.request_timeout))
				.layer(CompressionLayer::new()),
		)
		.with_state(state)
}

/// Restaurant routes
fn restaurant_routes() -> Router<AppState> {
	Router::new()
		.route("/restaurant", post(create_restaurant))
		.route("/restaurant/{id}/show", get(get_restaurant))
		.route("/restaurant/{id}/edit", put(update_restaurant))
		.route("/restaurant/{id}/delete", delete(delete_restaurant))
		.route("/restaurant/{id}/image", post(create_image))
}

/// Image routes
fn image_routes() -> Router<AppState> {
	Router::new()
		.route("/image/{id}/show", get(get_image))
		.route("/image/{id}/edit", put(update_image))
		.route("/image/{id}/delete", delete(delete_image))
}
