use std::io::Write;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use personal_planner::client::Client;
use personal_planner::memory::MemorySource;
use personal_planner::traits::TodoSource;
use personal_planner::{DraftField, TaskPlannerView};

const HELP: &str = "\
Commands:
  show                  display the planner again
  set <field> <value>   fill in the date, day, activity or status of the new task
  today                 fill in today's date and day
  submit                add the new task
  delete <id>           delete a task
  reload                start over, fetching the tasks again
  help                  display this help
  quit                  exit";

/// A personal task planner
#[derive(Parser, Debug)]
#[command(name = "planner", version)]
struct Args {
    /// Base URL of the server that hosts the /todos collection. Defaults to $PLANNER_URL, then http://localhost:4000
    #[arg(long)]
    url: Option<String>,

    /// Keep tasks in memory instead of talking to a server
    #[arg(long, conflicts_with = "url")]
    offline: bool,
}

enum Command {
    Show,
    Set(DraftField, String),
    Today,
    Submit,
    Delete(String),
    Reload,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb {
            "" | "show" => Ok(Command::Show),
            "set" => {
                let (field, value) = match rest.split_once(' ') {
                    Some((field, value)) => (field, value.trim()),
                    None => (rest, ""),
                };
                let field = field.parse::<DraftField>().map_err(|err| err.to_string())?;
                Ok(Command::Set(field, value.to_string()))
            },
            "today" => Ok(Command::Today),
            "submit" | "add" => Ok(Command::Submit),
            "delete" if rest.is_empty() == false => Ok(Command::Delete(rest.trim_start_matches('#').to_string())),
            "delete" => Err("Which task should be deleted?".to_string()),
            "reload" => Ok(Command::Reload),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command {:?}", other)),
        }
    }
}


#[tokio::main]
async fn main() {
    env_logger::init();
    let args = Args::parse();

    if args.offline {
        run(TaskPlannerView::new(MemorySource::new())).await;
        return;
    }

    let client = match args.url {
        Some(url) => Client::new(url),
        None => Client::from_config(),
    };
    match client {
        Ok(client) => {
            log::info!("Using tasks from {}", client.resource().collection());
            run(TaskPlannerView::new(client)).await
        },
        Err(err) => {
            log::error!("Unable to create a client: {}", err);
            std::process::exit(1);
        },
    }
}

async fn run<S: TodoSource>(view: TaskPlannerView<S>) {
    view.mount().await;
    print!("{}", view.render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                log::error!("Unable to read from stdin: {}", err);
                break;
            },
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err);
                continue;
            },
        };

        match command {
            Command::Show => {},
            Command::Set(field, value) => {
                if let Err(err) = view.edit_field(field, &value) {
                    println!("{}", err);
                    continue;
                }
            },
            Command::Today => {
                let today = chrono::Local::now().date_naive();
                let date = today.format("%Y-%m-%d").to_string();
                let day = today.format("%A").to_string();
                if let Err(err) = view.edit_field(DraftField::Date, &date).and_then(|_| view.edit_field(DraftField::Day, &day)) {
                    println!("{}", err);
                    continue;
                }
            },
            Command::Submit => {
                view.submit().await;
            },
            Command::Delete(wanted) => {
                let id = view.tasks().into_iter()
                    .map(|task| task.id().clone())
                    .find(|id| id.to_string() == wanted);
                match id {
                    Some(id) => { view.delete(&id).await; },
                    None => {
                        println!("There is no task #{}", wanted);
                        continue;
                    },
                }
            },
            Command::Reload => {
                view.unmount();
                view.mount().await;
            },
            Command::Help => {
                println!("{}", HELP);
                continue;
            },
            Command::Quit => break,
        }

        print!("{}", view.render());
    }

    view.unmount();
}
