use anyhow::Result;
use clap::Args;
use renovlux_lib::hooks::ContactHook;
use renovlux_lib::types::{ContactFormData, ContactReply};
use renovlux_lib::{Client, ContactApi};

use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: String,

    #[arg(long)]
    pub last_name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Message body
    #[arg(long)]
    pub message: String,

    /// Service the request is about
    #[arg(long)]
    pub service: Option<String>,
}

#[derive(Args)]
pub struct NewsletterArgs {
    /// Address to subscribe
    pub email: String,
}

pub async fn run(args: &ContactArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let form = ContactFormData {
        first_name: args.first_name.clone(),
        last_name: args.last_name.clone(),
        email: args.email.clone(),
        phone: args.phone.clone(),
        message: args.message.clone(),
        service: args.service.clone(),
    };
    let hook = ContactHook::new(ContactApi::new(client.clone()));
    let reply = hook.send_message(&form).await;
    report(reply, "Message envoyé.", format)
}

pub async fn run_newsletter(args: &NewsletterArgs, client: &Client, format: OutputFormat) -> Result<()> {
    let hook = ContactHook::new(ContactApi::new(client.clone()));
    let reply = hook.subscribe_newsletter(&args.email).await;
    report(reply, "Inscription enregistrée.", format)
}

fn report(reply: ContactReply, fallback: &str, format: OutputFormat) -> Result<()> {
    if !reply.success {
        anyhow::bail!("{}", reply.message);
    }
    match format {
        OutputFormat::Json => print_json(&reply),
        _ if reply.message.trim().is_empty() => println!("{}", fallback),
        _ => println!("{}", reply.message),
    }
    Ok(())
}
