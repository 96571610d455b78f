use axum::{Json, extract::State};

use crate::{AppState, models::ContactInfo, services::contact_service};

pub async fn get_contact_info(State(state): State<AppState>) -> Json<Option<ContactInfo>> {
    Json(contact_service::get_contact_info(&state.db).await)
}
