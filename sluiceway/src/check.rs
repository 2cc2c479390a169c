use owo_colors::OwoColorize;
use sluiceway_core::conf::{ConfigError, load_pipeline};
use std::path::Path;

pub fn check(path: &Path, json: bool) -> anyhow::Result<()> {
    match load_pipeline(path) {
        Ok(cfg) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "ok": true,
                        "processors_enabled": cfg.processors.iter().filter(|p| p.enabled).count(),
                        "key_provider": cfg.key_provider.is_some(),
                    })
                );
            } else {
                println!("{} Config loaded successfully", "✔".green());
                println!(
                    "{} {} processors enabled",
                    "✔".green(),
                    cfg.processors.iter().filter(|p| p.enabled).count()
                );
                if cfg.key_provider.is_some() {
                    println!("{} key provider configured", "✔".green());
                }
            }
            Ok(())
        }
        Err(err) => {
            render_error(&err, json);
            std::process::exit(1);
        }
    }
}

fn render_error(err: &ConfigError, json: bool) {
    let messages: Vec<String> = match err {
        ConfigError::Validation { validation_errors } => {
            validation_errors.0.iter().map(|e| e.to_string()).collect()
        }
        other => vec![other.to_string()],
    };

    if json {
        println!("{}", serde_json::json!({ "ok": false, "errors": messages }));
    } else {
        for message in &messages {
            eprintln!("{} {}", "error:".red(), message);
        }
    }
}
