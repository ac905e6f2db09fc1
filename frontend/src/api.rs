use gloo_net::http::Request;
use shared::prize::PrizeOption;

/// Fetches the admin-managed prize configuration and filters it down to
/// active entries. The engine precondition (active prizes only) lives at
/// this boundary, not inside the wheel.
pub async fn fetch_prize_options() -> Result<Vec<PrizeOption>, String> {
    match Request::get("/api/prizes").send().await {
        Ok(response) => {
            if response.ok() {
                match response.json::<Vec<PrizeOption>>().await {
                    Ok(prizes) => Ok(prizes.into_iter().filter(|p| p.active).collect()),
                    Err(e) => Err(format!("Error parsing prize config: {:?}", e)),
                }
            } else {
                Err(format!("Error status: {}", response.status()))
            }
        }
        Err(e) => Err(format!("Network error: {:?}", e)),
    }
}
