use std::io::Write as _;
use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::watch;

use bresttrans::domain::TransportType;
use bresttrans::drive::{AccessToken, DriveClient, DriveConfig};
use bresttrans::entry::{CollectForm, Debouncer, save_record};
use bresttrans::history::{export_records, format_record, upload_records};
use bresttrans::notice::{Notice, NoticeLevel, Notices};
use bresttrans::profile::{
    ProfileStore, ProfileUpdate, Registration, UserProfile, apply_update, register,
};
use bresttrans::stops::StopDirectory;
use bresttrans::store::SessionStore;
use bresttrans::weather::{MockWeatherClient, WeatherClient, WeatherConfig, WeatherProvider};

/// Default location of the bundled stop asset.
const DEFAULT_STOPS_ASSET: &str = "assets/astops_with_next.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let stops_path = std::env::var("BRESTTRANS_STOPS")
        .unwrap_or_else(|_| DEFAULT_STOPS_ASSET.to_string());
    let data_dir = PathBuf::from(
        std::env::var("BRESTTRANS_DATA_DIR").unwrap_or_else(|_| ".".to_string()),
    );

    let directory = StopDirectory::load_or_empty(&stops_path);
    println!("Загружено записей остановок: {}", directory.len());

    // The sign-in flow lives outside this program; the token arrives
    // through the environment.
    let drive_token = std::env::var("BRESTTRANS_DRIVE_TOKEN")
        .ok()
        .map(AccessToken::new);
    if drive_token.is_none() {
        eprintln!("Warning: BRESTTRANS_DRIVE_TOKEN not set. Uploads will be refused.");
    }

    let drive = DriveClient::new(DriveConfig::new(std::env::temp_dir()))
        .expect("Failed to create Drive client");

    match std::env::var("OPEN_WEATHER_MAP_API_KEY") {
        Ok(key) => {
            let weather =
                WeatherClient::new(WeatherConfig::new(key)).expect("Failed to create weather client");
            run_session(directory, weather, drive, drive_token, data_dir).await;
        }
        Err(_) => {
            eprintln!("Warning: OPEN_WEATHER_MAP_API_KEY not set. Using canned weather.");
            run_session(
                directory,
                MockWeatherClient::default(),
                drive,
                drive_token,
                data_dir,
            )
            .await;
        }
    }
}

/// The active survey session: one surveyor, one in-memory record list.
async fn run_session<W: WeatherProvider>(
    directory: StopDirectory,
    weather: W,
    drive: DriveClient,
    drive_token: Option<AccessToken>,
    data_dir: PathBuf,
) {
    let (notices, mut notice_rx) = Notices::channel();
    let profile_store = ProfileStore::new(&data_dir);
    let mut profile = profile_store.load();
    let mut store = SessionStore::new();
    let mut form = CollectForm::new();

    if !profile.is_registered {
        println!("== Регистрация ==");
        loop {
            let Some(first_name) = read_line("Имя*: ") else { return };
            let Some(last_name) = read_line("Фамилия: ") else { return };
            let Some(email) = read_line("Электронная почта*: ") else { return };
            let Some(drive_link) = read_line("Ссылка на папку Google Drive*: ") else { return };
            let registration = Registration {
                first_name,
                last_name,
                email,
                drive_link,
            };
            if let Some(registered) = register(&profile_store, registration, &notices) {
                profile = registered;
                drain_notices(&mut notice_rx);
                break;
            }
            drain_notices(&mut notice_rx);
        }
    }

    println!("Команды: add, list, delete <n>, clear, export, upload, profile, quit");

    loop {
        let Some(line) = read_line("> ") else { break };
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();

        match command {
            "" => {}
            "add" => {
                fill_form(&mut form, &directory).await;
                save_record(&mut form, &directory, &weather, &mut store, &notices).await;
            }
            "list" => {
                if store.is_empty() {
                    println!("История пуста");
                }
                for (i, record) in store.records().iter().enumerate() {
                    println!("[{i}] {}\n", format_record(record));
                }
            }
            "delete" => {
                let removed = parts
                    .next()
                    .and_then(|n| n.parse::<usize>().ok())
                    .and_then(|index| store.remove_at(index));
                match removed {
                    Some(record) => println!("Удалена запись: {}", record.vehicle_number),
                    None => println!("Нет записи с таким номером"),
                }
            }
            "clear" => {
                store.clear();
                println!("История очищена");
            }
            "export" => {
                export_records(&store, &data_dir, &notices).await;
            }
            "upload" => {
                upload_records(
                    &mut store,
                    &profile,
                    drive_token.as_ref(),
                    &drive,
                    &notices,
                )
                .await;
            }
            "profile" => {
                edit_profile(&profile_store, &mut profile, &notices);
            }
            "quit" | "exit" => break,
            _ => println!("Неизвестная команда: {command}"),
        }

        drain_notices(&mut notice_rx);
    }
}

/// Prompt for every form field, with debounced stop suggestions.
async fn fill_form(form: &mut CollectForm, directory: &StopDirectory) {
    form.vehicle_number = read_field("Регистрационный номер", &form.vehicle_number);
    form.route_number = read_field("Номер маршрута", &form.route_number);

    println!("Тип транспорта (сейчас: {}):", form.transport_type);
    for (i, t) in TransportType::ALL.iter().enumerate() {
        println!("  {i}: {t}");
    }
    if let Some(choice) = read_line("Тип (номер, пусто = оставить): ") {
        if let Ok(index) = choice.parse::<usize>() {
            if let Some(t) = TransportType::ALL.get(index) {
                form.transport_type = *t;
            }
        }
    }

    let (mut current_debouncer, mut current_rx) = Debouncer::new(directory.distinct_stop_names());
    form.current_stop = prompt_stop(
        "Текущая остановка",
        &form.current_stop,
        &mut current_debouncer,
        &mut current_rx,
    )
    .await;

    let (mut next_debouncer, mut next_rx) = Debouncer::new(form.next_stop_options(directory));
    form.next_stop = prompt_stop(
        "Следующая остановка",
        &form.next_stop,
        &mut next_debouncer,
        &mut next_rx,
    )
    .await;

    form.people_at_stop = read_field("Заполненность остановки", &form.people_at_stop);
    form.people_in_transport = read_field("Заполненность транспорта", &form.people_in_transport);
    form.entered = read_field("Вошло", &form.entered);
    form.exited = read_field("Вышло", &form.exited);
}

/// Read a stop field, showing debounced suggestions for the typed text.
async fn prompt_stop(
    label: &str,
    current: &str,
    debouncer: &mut Debouncer,
    rx: &mut watch::Receiver<Vec<String>>,
) -> String {
    let input = read_field(label, current);
    debouncer.submit(&input);
    if rx.changed().await.is_ok() {
        let suggestions = rx.borrow_and_update().clone();
        if !suggestions.is_empty() && !suggestions.iter().any(|s| s == &input) {
            println!("Похожие остановки: {}", suggestions.join(", "));
        }
    }
    input
}

/// The profile screen: stage edits, save only when something changed.
fn edit_profile(store: &ProfileStore, profile: &mut UserProfile, notices: &Notices) {
    let mut update = ProfileUpdate::from_profile(profile);
    update.first_name = read_field("Имя", &update.first_name);
    update.last_name = read_field("Фамилия", &update.last_name);
    update.email = read_field("Email", &update.email);
    update.drive_link = read_field("Ссылка на Google Drive", &update.drive_link);

    if !update.differs_from(profile) {
        println!("Без изменений");
        return;
    }
    apply_update(store, profile, update, notices);
}

/// Prompt with the current value; an empty line keeps it.
fn read_field(label: &str, current: &str) -> String {
    let prompt = if current.is_empty() {
        format!("{label}: ")
    } else {
        format!("{label} [{current}]: ")
    };
    match read_line(&prompt) {
        Some(line) if !line.is_empty() => line,
        _ => current.to_string(),
    }
}

/// Read one trimmed line from stdin; `None` on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    match std::io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

/// Print everything the flows posted since the last drain.
fn drain_notices(rx: &mut UnboundedReceiver<Notice>) {
    while let Ok(notice) = rx.try_recv() {
        match notice.level {
            NoticeLevel::Info => println!("[i] {}", notice.text),
            NoticeLevel::Error => println!("[!] {}", notice.text),
        }
    }
}
