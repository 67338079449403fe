use axum::http::StatusCode;
use restaurant_api::schemas::restaurant::{
	CreateRestaurantRequest,
	RestaurantResponse,
};
use serde_json::json;

mod common;

use common::TestEnv;

#[tokio::test(flavor = "multi_thread")]
async fn test_create_restaurant() {
	let env = TestEnv::new();

	let response = env
		.app
		.post("/api/restaurant")
		.json(&json!({
			"name": "Le Gourmet",
			"description": "Fine dining",
			"maxGuest": 40,
		}))
		.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);
	assert_eq!(
		response.header("location"),
		"http://localhost/api/restaurant/1/show"
	);

	let body = response.json::<RestaurantResponse>();

	assert_eq!(body.id, 1);
	assert_eq!(body.name, "Le Gourmet");
	assert_eq!(body.max_guest, 40);
	assert_eq!(body.updated_at, None);
	assert_eq!(body.deleted_at, None);
	assert!(body.images.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_created_restaurant_omits_deleted_at() {
	let env = TestEnv::new();

	let response = env
		.app
		.post("/api/restaurant")
		.json(&json!({ "name": "Le Gourmet", "description": "Fine dining" }))
		.await;

	let body = response.json::<serde_json::Value>();

	assert!(body.get("deletedAt").is_none());
	assert!(body["updatedAt"].is_null());
	assert!(body["amOpeningTime"].is_null());
	assert_eq!(body["pmOpeningTime"], json!([]));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_restaurant_round_trip() {
	let env = TestEnv::new();

	let request: CreateRestaurantRequest = serde_json::from_value(json!({
		"name": "Chez Nous",
		"description": "Bistro",
		"amOpeningTime": [{ "open": "08:00:00", "close": "11:30:00" }],
		"pmOpeningTime": [
			{ "open": "12:00:00", "close": "14:00:00" },
			{ "open": "18:30:00", "close": "22:00:00" },
		],
		"maxGuest": 25,
	}))
	.unwrap();

	let created = env.app.post("/api/restaurant").json(&request).await;

	assert_eq!(created.status_code(), StatusCode::CREATED);

	let created = created.json::<RestaurantResponse>();

	let response = env
		.app
		.get(&format!("/api/restaurant/{}/show", created.id))
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<RestaurantResponse>();

	assert_eq!(body, created);
	assert_eq!(body.name, request.name);
	assert_eq!(body.description, request.description);
	assert_eq!(body.am_opening_time, request.am_opening_time);
	assert_eq!(body.pm_opening_time, request.pm_opening_time);
	assert_eq!(body.max_guest, request.max_guest);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_restaurant_malformed() {
	let env = TestEnv::new();

	let response = env
		.app
		.post("/api/restaurant")
		.json(&json!({ "description": "No name" }))
		.expect_failure()
		.await;

	assert!(response.status_code().is_client_error());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_restaurant_not_found() {
	let env = TestEnv::new();

	let response =
		env.app.get("/api/restaurant/999/show").expect_failure().await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert!(response.text().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_restaurant() {
	let env = TestEnv::new();
	let id = env.create_restaurant("Le Gourmet").await;

	let response = env
		.app
		.put(&format!("/api/restaurant/{id}/edit"))
		.json(&json!({ "name": "New Name" }))
		.await;

	assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

	let body = env
		.app
		.get(&format!("/api/restaurant/{id}/show"))
		.await
		.json::<RestaurantResponse>();

	assert_eq!(body.name, "New Name");
	assert_eq!(body.description, "A place to eat");

	let updated_at = body.updated_at.unwrap();
	assert!(updated_at >= body.created_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_restaurant_clears_morning_hours() {
	let env = TestEnv::new();

	let created = env
		.app
		.post("/api/restaurant")
		.json(&json!({
			"name": "Le Gourmet",
			"description": "Fine dining",
			"amOpeningTime": [{ "open": "08:00:00", "close": "11:00:00" }],
		}))
		.await
		.json::<RestaurantResponse>();

	env.app
		.put(&format!("/api/restaurant/{}/edit", created.id))
		.json(&json!({ "amOpeningTime": null, "maxGuest": 8 }))
		.await;

	let body = env
		.app
		.get(&format!("/api/restaurant/{}/show", created.id))
		.await
		.json::<RestaurantResponse>();

	assert_eq!(body.am_opening_time, None);
	assert_eq!(body.max_guest, 8);
	assert_eq!(body.name, "Le Gourmet");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_update_restaurant_not_found() {
	let env = TestEnv::new();

	let response = env
		.app
		.put("/api/restaurant/999/edit")
		.json(&json!({ "name": "New Name" }))
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_restaurant() {
	let env = TestEnv::new();
	let id = env.create_restaurant("Le Gourmet").await;

	let response = env.app.delete(&format!("/api/restaurant/{id}/delete")).await;

	assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

	let response = env
		.app
		.get(&format!("/api/restaurant/{id}/show"))
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert!(response.text().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_restaurant_twice() {
	let env = TestEnv::new();
	let id = env.create_restaurant("Le Gourmet").await;

	env.app.delete(&format!("/api/restaurant/{id}/delete")).await;

	let response = env
		.app
		.delete(&format!("/api/restaurant/{id}/delete"))
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

	let response = env
		.app
		.put(&format!("/api/restaurant/{id}/edit"))
		.json(&json!({ "name": "Back again" }))
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_deleted_restaurant_explicitly() {
	let env = TestEnv::new();
	let id = env.create_restaurant("Le Gourmet").await;

	env.app.delete(&format!("/api/restaurant/{id}/delete")).await;

	let response = env
		.app
		.get(&format!("/api/restaurant/{id}/show"))
		.add_query_param("withDeleted", true)
		.await;

	assert_eq!(response.status_code(), StatusCode::OK);

	let body = response.json::<RestaurantResponse>();

	assert_eq!(body.id, id);
	assert!(body.deleted_at.is_some());
	assert_eq!(body.updated_at, body.deleted_at);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_healthcheck() {
	let env = TestEnv::new();

	let response = env.app.get("/healthcheck").await;

	assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_restaurant_id_out_of_range() {
	let env = TestEnv::new();
	env.create_restaurant("Le Gourmet").await;

	let response = env
		.app
		.get("/api/restaurant/3000000000/show")
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert!(response.text().is_empty());

	let response = env
		.app
		.put("/api/restaurant/3000000000/edit")
		.json(&json!({ "name": "New Name" }))
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert!(response.text().is_empty());

	let response = env
		.app
		.delete("/api/restaurant/-3000000000/delete")
		.expect_failure()
		.await;

	assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
	assert!(response.text().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_create_restaurant_with_long_name() {
	let env = TestEnv::new();
	let name = "a".repeat(300);

	let response = env
		.app
		.post("/api/restaurant")
		.json(&json!({ "name": name, "description": "Fine dining" }))
		.await;

	assert_eq!(response.status_code(), StatusCode::CREATED);
	assert_eq!(response.json::<RestaurantResponse>().name, name);
}
