mod build_info;
mod constants;
mod game;
mod input;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use game::types::RabbitGame;
use input::InputResult;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "rabbit-click {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Rabbit Click - Terminal Whack-a-Rabbit\n");
                println!("Usage: rabbit-click\n");
                println!("Click the rabbit before it hides. Every 10 points it gets faster.");
                println!("Requires a terminal with mouse support.\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'rabbit-click --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    // Restore terminal even if the loop errored
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Frame loop: draw, dispatch input, advance timers while playing.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut game = RabbitGame::new();
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, &game))?;

        if event::poll(Duration::from_millis(constants::FRAME_POLL_MS))? {
            let ev = event::read()?;
            let size = terminal.size()?;
            let origin = game::grid::field_origin(size.width, size.height);
            if let InputResult::Exit = input::handle_event(&ev, &mut game, origin, &mut rng) {
                return Ok(());
            }
        }

        // dt is recomputed every frame, even when not ticking, so pausing in
        // the confirm dialog leaks no elapsed time into the phase timers.
        let dt_ms = last_frame.elapsed().as_millis() as u64;
        last_frame = Instant::now();
        game::logic::tick_game(&mut game, dt_ms, &mut rng);
    }
}
