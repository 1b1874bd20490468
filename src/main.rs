use log::{debug, error};
use std::env;
use tokio::io::AsyncReadExt;

use pantry_keeper::{format, generate_recipe_blocks, AppConfig, ProviderFactory, TextBlock};

const USAGE: &str = "Usage:\n  pantry-keeper format [FILE]\n  pantry-keeper generate <PROMPT>...";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = args.first().ok_or(USAGE)?;

    let blocks = match command.as_str() {
        "format" => {
            let text = match args.get(1) {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => read_stdin().await?,
            };
            format(&text)
        }
        "generate" => {
            let prompt = args[1..].join(" ");
            if prompt.trim().is_empty() {
                return Err(USAGE.into());
            }

            let config = AppConfig::load()?;
            debug!("{:#?}", config);
            let provider = ProviderFactory::from_app_config(&config)?;

            match generate_recipe_blocks(provider.as_ref(), &prompt).await {
                Ok(blocks) => blocks,
                Err(e) => {
                    error!("Generation with {} failed", provider.provider_name());
                    return Err(e.into());
                }
            }
        }
        _ => return Err(USAGE.into()),
    };

    print_blocks(&blocks)
}

async fn read_stdin() -> Result<String, std::io::Error> {
    let mut text = String::new();
    tokio::io::stdin().read_to_string(&mut text).await?;
    Ok(text)
}

fn print_blocks(blocks: &[TextBlock]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(blocks)?);
    Ok(())
}
