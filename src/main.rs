use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use bug_crossing::compute::{apply_command, init_state, step_simulation};
use bug_crossing::display;
use bug_crossing::entities::{Board, BoardVariant, GameState, SpriteId};
use bug_crossing::error::GameError;
use bug_crossing::input::{map_key, Command, KeyAction, KeyTracker};
use bug_crossing::resources::SpriteCatalogue;
use bug_crossing::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "bug_crossing", about = "Cross the street without getting caught by the bugs")]
struct Args {
    /// JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board constant set, overriding the settings file.
    #[arg(long, value_enum)]
    board: Option<BoardArg>,

    /// Write log output to this file, overriding the settings file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum BoardArg {
    Standard,
    Tall,
}

impl From<BoardArg> for BoardVariant {
    fn from(arg: BoardArg) -> Self {
        match arg {
            BoardArg::Standard => BoardVariant::Standard,
            BoardArg::Tall => BoardVariant::Tall,
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode while playing, so logs only go to a file.
fn init_logging(log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("could not create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

/// Block until the user presses start or quit.
fn wait_for_start(rx: &mpsc::Receiver<Event>) -> MenuResult {
    while let Ok(ev) = rx.recv() {
        if let Event::Key(key @ KeyEvent { kind: KeyEventKind::Press, .. }) = ev {
            match map_key(&key) {
                KeyAction::Start => return MenuResult::Start,
                KeyAction::Quit => return MenuResult::Quit,
                _ => {}
            }
        }
    }
    MenuResult::Quit
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Won,
    Quit,
}

/// Drive the simulation one frame at a time until the player wins or quits.
///
/// dt comes from a monotonic clock. Direction keys go through `KeyTracker`,
/// which also issues the key-up `Stop` on terminals without release events.
fn game_loop<W: Write>(
    out: &mut W,
    catalogue: &SpriteCatalogue,
    state: &mut GameState,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
) -> Result<LoopExit, GameError> {
    let frame_budget = Duration::from_secs(1) / settings.fps;
    let mut keys = KeyTracker::new(settings.hold_frames);
    let mut frame: u64 = 0;
    let mut last = Instant::now();

    // Keys released while the win screen was up never reached the tracker.
    apply_command(state, Command::Stop);
    apply_command(state, Command::Start);

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain pending input (non-blocking) ────────────────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            match map_key(&key) {
                KeyAction::Quit if key.kind == KeyEventKind::Press => return Ok(LoopExit::Quit),
                KeyAction::Direction(dir) => {
                    if let Some(command) = keys.handle(dir, key.kind, frame) {
                        apply_command(state, command);
                    }
                }
                _ => {}
            }
        }
        if let Some(command) = keys.poll(frame) {
            apply_command(state, command);
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f32();
        last = now;

        let outcome = step_simulation(state, dt);
        display::render(out, catalogue, &display::scene_after(state, &outcome))?;

        if outcome.won {
            return Ok(LoopExit::Won);
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("could not load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if let Some(board) = args.board {
        settings.board = board.into();
    }
    if args.log_file.is_some() {
        settings.log_file = args.log_file.clone();
    }
    init_logging(settings.log_file.as_ref())?;

    let board = Board::new(settings.board);
    log::info!("starting on the {:?} board", board.variant);
    let (cols, rows) = terminal::size().context("could not query terminal size")?;
    display::check_fits(&board, cols, rows)?;

    let mut catalogue = SpriteCatalogue::new();
    catalogue.request(&SpriteId::ALL);
    catalogue.load();
    if !catalogue.is_ready() {
        anyhow::bail!("sprite catalogue failed to load");
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Release events let a key-up stop the player immediately. Terminals
    // without the kitty protocol fall back to the hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, &catalogue, &rx, &settings, board);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map_err(Into::into)
}

fn run<W: Write>(
    out: &mut W,
    catalogue: &SpriteCatalogue,
    rx: &mpsc::Receiver<Event>,
    settings: &Settings,
    board: Board,
) -> Result<(), GameError> {
    let mut state = init_state(board, settings.roster());

    display::render_intro(out, &state.board)?;
    if let MenuResult::Quit = wait_for_start(rx) {
        return Ok(());
    }

    loop {
        match game_loop(out, catalogue, &mut state, rx, settings)? {
            LoopExit::Quit => break,
            LoopExit::Won => {
                display::render_win(out, &state.board)?;
                if let MenuResult::Quit = wait_for_start(rx) {
                    break;
                }
            }
        }
    }
    log::info!("exiting");
    Ok(())
}
