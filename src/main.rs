use std::io::Write;
use futures::StreamExt;
use log::{error, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use cep_lookup::render::{PLACEHOLDER, SUBMIT_LABEL, SUBTITLE, TITLE};
use cep_lookup::{AddressLookup, BrasilApiClient, Config, LookupController, Phase, Render, TerminalRenderer};

#[tokio::main]
async fn main() {
    if let Err(e) = color_eyre::install() {
        eprintln!("cannot install error report handler: {:?}", e);
    }
    init_logging();

    match run().await {
        Err(e) => {
            error!("Error: {:?}", e);
            std::process::exit(1);
        }
        Ok(false) => std::process::exit(1),
        _ => {}
    }
}

/// logs go to stderr, the rendered view to stdout
fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .init();
}

/// returns false when a lookup given on the command line failed
async fn run() -> color_eyre::Result<bool> {
    let config = Config::from_env()?;
    info!("using lookup endpoint [{}]", config.base_url);

    let client = BrasilApiClient::with_base_url(config.base_url)?;
    let controller = LookupController::new(client, TerminalRenderer::stdout());

    let codes = std::env::args().skip(1).collect::<Vec<_>>();
    let all_found = if codes.is_empty() {
        let stdin = BufReader::new(tokio::io::stdin());
        interactive(&controller, stdin, &mut std::io::stdout()).await?;
        true
    } else {
        lookup_all(&controller, codes).await
    };

    controller.teardown();
    Ok(all_found)
}

/// one line per submission, EOF ends the session
async fn interactive<S, R, I, W>(controller: &LookupController<S, R>, input: I, out: &mut W) -> color_eyre::Result<()>
where
    S: AddressLookup,
    R: Render,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{}\n{}\n", TITLE, SUBTITLE)?;

    let mut lines = input.lines();
    loop {
        write!(out, "{} [Enter: {}]: ", PLACEHOLDER, SUBMIT_LABEL)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };
        controller.on_input_changed(&line);
        // pressing enter submits
        controller.submit().await;
        writeln!(out)?;
    }
    Ok(())
}

async fn lookup_all<S: AddressLookup, R: Render>(controller: &LookupController<S, R>, codes: Vec<String>) -> bool {
    let total = codes.len();
    let failed = futures::stream::iter(codes).enumerate()
        .then(|(idx, raw)| async move {
            info!("[{}/{total}] looking up [{}]", idx + 1, raw);
            println!("> {}", raw);
            controller.on_input_changed(&raw);
            controller.submit().await
        })
        .filter(|phase| futures::future::ready(*phase == Phase::Failed))
        .count()
        .await;

    if failed > 0 {
        error!("[{}/{}] lookups failed", failed, total);
    }
    failed == 0
}
