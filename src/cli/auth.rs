//! Session commands: login, logout, status, whoami

use chrono::Utc;
use colored::Colorize;
use dialoguer::{Input, Password};
use serde::Serialize;
use tabled::Tabled;

use crate::cli::CommandContext;
use crate::client::models::{decode_claims, User};
use crate::client::AuthApi;
use crate::error::{ApiError, Error, Result};

pub async fn login(ctx: &CommandContext, username: Option<String>) -> Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::<String>::new()
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = Password::new().with_prompt("Password").interact()?;

    match ctx.auth().sign_in(&username, &password).await {
        Ok(session) => {
            let name = session
                .claims
                .username
                .unwrap_or_else(|| username.clone());
            println!("{} Signed in as {}", "✓".green().bold(), name);
            Ok(())
        }
        // A rejected login surfaces as the 401 policy's terminal state
        Err(Error::Api(ApiError::SessionExpired)) | Err(Error::Api(ApiError::Unauthorized)) => Err(
            Error::Other("Login failed: invalid username or password".to_string()),
        ),
        Err(err) => Err(err),
    }
}

pub fn logout(ctx: &CommandContext) -> Result<()> {
    ctx.auth().sign_out()?;
    println!("Signed out.");
    Ok(())
}

pub fn status(ctx: &CommandContext) -> Result<()> {
    println!("API origin: {}", ctx.config.api_url()?);

    match ctx.auth().stored_bundle()? {
        Some(bundle) => match decode_claims(&bundle.access_token) {
            Ok(claims) => {
                let user = claims.username.as_deref().unwrap_or("<unknown>");
                let role = claims.role.as_deref().unwrap_or("<unknown>");
                println!("Signed in as {} ({})", user, role);

                if let Some(expires_at) = claims.expires_at() {
                    if expires_at < Utc::now() {
                        println!("Access token expired at {}", expires_at);
                    } else {
                        println!("Access token valid until {}", expires_at);
                    }
                }
            }
            Err(_) => println!("Signed in (stored token is not decodable)"),
        },
        None => println!("Not signed in."),
    }

    Ok(())
}

/// Display format for the signed-in user
#[derive(Tabled, Serialize)]
struct UserDisplay {
    #[tabled(rename = "ID")]
    id: String,

    #[tabled(rename = "USERNAME")]
    username: String,

    #[tabled(rename = "ROLE")]
    role: String,

    #[tabled(rename = "PHONE")]
    phone: String,
}

impl From<User> for UserDisplay {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            phone: user.phone.unwrap_or_else(|| "-".to_string()),
        }
    }
}

pub async fn whoami(ctx: &CommandContext) -> Result<()> {
    let user = ctx.auth().current_user().await?;
    ctx.print(&[UserDisplay::from(user)])
}
