// Headless driver for the tab session: one command per line on stdin.
//
//   go <path>            route arrives from outside (address bar, link)
//   open <path> [title]  open or focus a tab
//   activate <path>      focus a tab
//   close <path>         close a tab
//   close-others <path>  keep only this tab
//   close-all            close everything
//   move <from> <to>     drag in tab strip positions
//   pin <path>           toggle pin
//   list                 print the strip and mounted views
//   quit

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tab_session_lib::modules::content_host::TabContentHost;
use tab_session_lib::modules::navigation::QueuedNavigator;
use tab_session_lib::modules::registry::TabRegistry;
use tab_session_lib::modules::routes::Route;
use tab_session_lib::modules::session_store::FileStore;
use tab_session_lib::modules::tabs_bar::{self, TabBarAction};
use tab_session_lib::settings::Settings;
use tab_session_lib::{init_logging, Result, TabsSessionManager};

type Manager = TabsSessionManager<FileStore, QueuedNavigator>;

fn build_registry() -> Result<TabRegistry<String>> {
    let mut builder = TabRegistry::builder();
    for route in Route::ALL {
        builder = builder.route(route, move |path| format!("{} ({})", route.title(), path))?;
    }
    Ok(builder.build())
}

fn print_session(out: &mut impl Write, manager: &Manager, host: &TabContentHost<String>) -> io::Result<()> {
    for (pos, item) in tabs_bar::items(manager.state()).iter().enumerate() {
        writeln!(
            out,
            "{:>2} {}{} [{}] {}  {}",
            pos,
            if item.active { '*' } else { ' ' },
            if item.pinned { '^' } else { ' ' },
            item.icon.as_str(),
            item.title,
            item.path
        )?;
    }
    for rendered in host.render(manager.tabs(), manager.active_path()) {
        writeln!(
            out,
            "   view {} {}",
            if rendered.visible { "shown " } else { "hidden" },
            rendered.view
        )?;
    }
    Ok(())
}

/// Returns false when the session should end.
fn handle_line(manager: &mut Manager, line: &str) -> bool {
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return true;
    };
    let arg = words.next();
    let rest: Vec<&str> = words.collect();

    match (cmd, arg) {
        ("go", Some(path)) => manager.navigator_mut().push_external(path),
        ("open", Some(path)) => {
            let title = rest.join(" ");
            manager.open_tab(path, (!title.is_empty()).then_some(title.as_str()));
        }
        ("activate", Some(path)) => tabs_bar::dispatch(manager, TabBarAction::Activate(path.to_string())),
        ("close", Some(path)) => tabs_bar::dispatch(manager, TabBarAction::Close(path.to_string())),
        ("close-others", Some(path)) => {
            tabs_bar::dispatch(manager, TabBarAction::CloseOthers(path.to_string()))
        }
        ("close-all", _) => tabs_bar::dispatch(manager, TabBarAction::CloseAll),
        ("pin", Some(path)) => tabs_bar::dispatch(manager, TabBarAction::TogglePin(path.to_string())),
        ("move", Some(from)) => match (from.parse(), rest.first().map(|s| s.parse())) {
            (Ok(from), Some(Ok(to))) => tabs_bar::dispatch(manager, TabBarAction::Drag { from, to }),
            _ => eprintln!("usage: move <from> <to>"),
        },
        ("list", _) => {}
        ("quit", _) | ("exit", _) => return false,
        _ => eprintln!("unknown command: {}", line.trim()),
    }
    true
}

fn main() -> Result<()> {
    let settings_file = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(Settings::default_file);
    let settings = Settings::load(&settings_file);
    let level = settings.log_level();
    init_logging(level.unwrap_or(log::LevelFilter::Info));
    if level.is_none() {
        log::warn!("[Settings] Unknown log level {:?}, using info", settings.log_level);
    }

    let store = FileStore::new(settings.state_dir(), &settings.storage_key);
    log::info!("[Main] Session file: {}", store.path().display());

    let registry = build_registry()?;
    let mut host = TabContentHost::new();
    let mut manager = TabsSessionManager::new(store, QueuedNavigator::new(), settings.default_path.clone());

    // Land on whatever was active last time, or the default screen.
    let start = manager
        .active_path()
        .unwrap_or(settings.default_path.as_str())
        .to_string();
    manager.navigator_mut().push_external(&start);
    manager.settle();

    let stdin = io::stdin();
    let stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| tab_session_lib::Error::Io {
            path: PathBuf::from("<stdin>"),
            source: e,
        })?;
        if !handle_line(&mut manager, &line) {
            break;
        }
        manager.settle();
        host.sync(manager.tabs(), &registry);

        let mut out = stdout.lock();
        if let Err(e) = print_session(&mut out, &manager, &host) {
            log::warn!("[Main] Failed to write output: {}", e);
            break;
        }
    }

    log::info!("[Main] Closing with {} tab(s) open", manager.tabs().len());
    Ok(())
}
