use actix_web::web::{block, Data, Json, Path};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Signup, SqlitePool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentRequest {
    pub paid: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PaymentResponse {
    pub success: bool,
}

/// Sets the paid flag on a signup.
///
/// Reports success whether or not the signup exists; an update that touched
/// no rows is only logged.
pub async fn update_payment(
    signup_id: Path<i32>,
    pool: Data<SqlitePool>,
    params: Json<PaymentRequest>,
) -> Result<Json<PaymentResponse>, Error> {
    let signup_id = signup_id.into_inner();
    let paid = params.paid;

    let updated = block(move || {
        let mut conn = get_conn(&pool)?;
        Signup::set_paid(&mut conn, signup_id, paid)
    })
    .await??;

    if updated == 0 {
        warn!("Payment update for unknown signup {}", signup_id);
    }

    Ok(Json(PaymentResponse { success: true }))
}
