//! Generation command handler and the interactive review loop.

use super::App;
use super::commands::GenerateArgs;
use super::render::print_result;
use std::future::Future;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, warn};
use vibecoder::{
    DriveProxyClient, Feedback, GeminiClient, GenerationOptions, GenerationResult, PendingTurn,
    ScriptDriver, ScriptNaming, SessionController, SessionPhase, Streaming, TerminalEffects,
    TurnSettings, VibeErrorKind, VibeResult, collect_stream, require_verified_key,
};

type Input = Lines<BufReader<Stdin>>;

/// Generate a script, then review it interactively unless `--once` is set.
pub async fn run_generate(app: &App, args: GenerateArgs) -> VibeResult<()> {
    let options = GenerationOptions::new(
        *app.settings.include_gemini_helper() && !args.no_helper,
        *app.settings.include_sample_code() && !args.no_samples,
    );
    let model = app.config.gemini.choose_model(args.model.as_deref());
    let mut settings = TurnSettings::from(&app.settings)
        .with_model(model)
        .with_options(options);
    if let Some(key) = app.api_key() {
        require_verified_key(&app.client, &key).await?;
        settings = settings.with_api_key(key);
    }
    debug!(?settings, "Generation settings");

    // Warm the context cache while the session is wired up.
    let _preload = app.context.preload();

    let client = Arc::new(app.client.clone());
    let session = SessionController::new(client.clone(), settings)
        .with_effects(Arc::new(TerminalEffects::new()))
        .with_publisher(Arc::new(DriveProxyClient::from_config(&app.config.proxy)?));

    println!("Generating with {}...", model.label());
    let turn = session.begin(&args.prompt)?;
    drive_turn(app, &session, &client, turn, args.stream).await;

    if args.once {
        return Ok(());
    }

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    review_loop(app, &session, &client, &mut input, args.stream).await;
    Ok(())
}

/// Send a started turn and apply its result to the session.
async fn drive_turn(
    app: &App,
    session: &SessionController,
    client: &GeminiClient,
    turn: Option<PendingTurn>,
    stream: bool,
) {
    let Some(turn) = turn else {
        return;
    };

    let result = if stream {
        let events = client.generate_stream(turn.request(), turn.api_key()).await;
        let include_helper = *turn.request().options().include_helper();
        let context = app.context.snapshot();
        let mut stdout = std::io::stdout();
        let result = collect_stream(events, include_helper, &context, |event| {
            if let Some(delta) = event.text_delta() {
                print!("{}", delta);
                let _ = stdout.flush();
            }
        })
        .await;
        println!();
        result
    } else {
        with_progress(session, client.generate(turn.request(), turn.api_key())).await
    };

    let shown = result.clone();
    if session.resolve(turn.sequence(), result) {
        print_result(&shown, stream);
    }
}

/// Await `work` while showing the session's elapsed seconds.
async fn with_progress<F>(session: &SessionController, work: F) -> GenerationResult
where
    F: Future<Output = GenerationResult>,
{
    tokio::pin!(work);
    let mut tick = tokio::time::interval(Duration::from_millis(500));
    loop {
        tokio::select! {
            result = &mut work => {
                eprint!("\r\x1b[2K");
                return result;
            }
            _ = tick.tick() => {
                eprint!("\rGenerating... {}s", session.snapshot().elapsed_seconds());
            }
        }
    }
}

async fn ask(input: &mut Input, question: &str) -> Option<String> {
    print!("{} ", question);
    let _ = std::io::stdout().flush();
    match input.next_line().await {
        Ok(line) => line,
        Err(e) => {
            warn!(error = %e, "Failed to read input");
            None
        }
    }
}

fn menu(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Reviewed {
            feedback: Feedback::AwaitingFeedback,
        } => "Did it work? [y]es / [n]o, refine / [s]ave / [p]ublish / [r]estart / [q]uit:",
        SessionPhase::Reviewed { .. } => "[n] refine / [s]ave / [p]ublish / [r]estart / [q]uit:",
        _ => "[r]estart / [q]uit:",
    }
}

async fn review_loop(
    app: &App,
    session: &SessionController,
    client: &GeminiClient,
    input: &mut Input,
    stream: bool,
) {
    loop {
        let Some(choice) = ask(input, menu(session.phase())).await else {
            break;
        };
        match choice.trim() {
            "y" => {
                if session.feedback(true) {
                    println!("Great! The script is on your clipboard.");
                }
            }
            "n" => {
                if !session.feedback(false) {
                    continue;
                }
                let Some(text) = ask(input, "What should change?").await else {
                    break;
                };
                match session.begin_refine(&text) {
                    Ok(turn) => drive_turn(app, session, client, turn, stream).await,
                    Err(e) => eprintln!("{}", e.kind),
                }
            }
            "s" => save(app, session, client).await,
            "p" => publish(app, session).await,
            "r" => {
                session.reset();
                let Some(prompt) = ask(input, "Describe your next script:").await else {
                    break;
                };
                match session.begin(&prompt) {
                    Ok(turn) => drive_turn(app, session, client, turn, stream).await,
                    Err(e) => eprintln!("{}", e.kind),
                }
            }
            "q" => break,
            "" => {}
            other => println!("Unknown choice: {}", other),
        }
    }
}

fn report_drive_error(err: &vibecoder::VibeError) {
    match err.kind() {
        VibeErrorKind::Drive(e) => eprintln!("{}", e.kind),
        VibeErrorKind::Session(e) => eprintln!("{}", e.kind),
        _ => eprintln!("{}", err),
    }
}

async fn save(app: &App, session: &SessionController, client: &GeminiClient) {
    let Some(token) = app.google_token() else {
        eprintln!("No Google access token. Set googleAccessToken in settings or GOOGLE_ACCESS_TOKEN.");
        return;
    };

    let prompt = session.snapshot().prompt().clone();
    let name = match session.settings().credential() {
        Some(key) => client.suggest_script_name(&prompt, key).await,
        None => vibecoder::fallback_script_name(&prompt),
    };
    let file_name = format!("{}.gs", name.replace(' ', ""));

    match session.save_to_drive(&token, Some(&file_name)).await {
        Ok(saved) => println!("Saved {} to Drive: {}", saved.name(), saved.web_view_link()),
        Err(e) => report_drive_error(&e),
    }
}

async fn publish(app: &App, session: &SessionController) {
    let Some(token) = app.google_token() else {
        eprintln!("No Google access token. Set googleAccessToken in settings or GOOGLE_ACCESS_TOKEN.");
        return;
    };

    match session.publish(&token, None).await {
        Ok(published) => {
            println!(
                "Published version {} (deployment {})",
                published.version_number(),
                published.deployment_id()
            );
            if let Some(url) = published.deployment_url() {
                println!("Web app: {}", url);
            }
        }
        Err(e) => report_drive_error(&e),
    }
}
