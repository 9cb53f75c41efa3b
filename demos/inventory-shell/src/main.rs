use std::env;
use std::process::ExitCode;

use medicine_inventory_client::ui::StatusRegion;
use medicine_inventory_client::{ClientConfig, InventoryClient, InventoryPage, PageMounts};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const USAGE: &str = "usage: inventory-shell [list | create NAME PRICE | update NAME PRICE | delete NAME | average]";

fn print_status(label: &str, status: Option<&StatusRegion>) {
    if let Some(status) = status {
        println!("[{label}] {} ({})", status.text(), status.tone().class_name());
    }
}

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = ClientConfig::from_env();
    info!("Using inventory service at {}", config.base_url);

    let client = match InventoryClient::builder().config(config).build() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to build client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut page = InventoryPage::new(client, PageMounts::all());
    // A failed load is already rendered into the container.
    let _ = page.load();

    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let succeeded = match args.as_slice() {
        [] | ["list"] => true,
        ["create", name, price] => {
            if let Some(form) = page.create_form_mut() {
                form.fill(*name, *price);
            }
            let ok = page.submit_create().is_success();
            print_status("create", page.create_status());
            ok
        }
        ["update", name, price] => {
            if let Some(form) = page.update_form_mut() {
                form.fill(*name, *price);
            }
            let ok = page.submit_update().is_success();
            print_status("update", page.update_status());
            ok
        }
        ["delete", name] => {
            if let Some(form) = page.delete_form_mut() {
                form.set_name(*name);
            }
            let ok = page.submit_delete().is_success();
            print_status("delete", page.delete_status());
            ok
        }
        ["average"] => {
            let ok = page.trigger_average().is_success();
            print_status("average", page.average_result());
            ok
        }
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    if let Some(html) = page.medicines_html() {
        println!("{html}");
    }

    if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
