//! `volt create-admin` - create an administrator account.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use dialoguer::Password;
use volt_auth::{hash_password, Role, User};
use volt_store::Store;

use crate::output::Output;

#[derive(Args)]
pub struct CreateAdminArgs {
    /// Store snapshot file
    #[arg(long, default_value = "volt.db.json")]
    store: PathBuf,

    /// Admin email address
    #[arg(long, default_value = "admin@store.com")]
    email: String,

    /// Admin display name
    #[arg(long, default_value = "Admin")]
    name: String,

    /// Admin password (prompted when omitted)
    #[arg(long)]
    password: Option<String>,
}

pub async fn run(args: CreateAdminArgs, output: &Output) -> Result<()> {
    let store = Store::open(&args.store).await?;
    let users = store.collection::<User>();

    if users.find_one(|u| u.email == args.email).await?.is_some() {
        output.info("Admin already exists.");
        return Ok(());
    }

    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt(format!("Password for {}", args.email))
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()?,
    };

    let admin = User::new(args.name, args.email, hash_password(&password)?).with_role(Role::Admin);
    users.save(&admin).await?;

    output.success("Admin user created.");
    output.debug(&format!("admin id: {}", admin.id));

    Ok(())
}
