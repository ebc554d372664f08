use std::io::{self, BufRead, Write};

use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum_todo_app::client::api::TodoApi;
use axum_todo_app::client::state::{CreateForm, ListEvent, TodoList};
use axum_todo_app::config;
use axum_todo_app::schema::{Patch, UpdateTodoSchema};

// Interactive client for the todo API. The list is fetched once at startup;
// afterwards every successful mutation patches the local mirror instead of
// re-fetching, and every failure is logged and leaves the mirror untouched.
#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let api = TodoApi::new(&config::api_url_from_env());
    let mut list = TodoList::new();
    let mut form = CreateForm::default();

    // Initial load
    match api.list().await {
        Ok(todos) => list.apply(ListEvent::Loaded(todos)),
        Err(err) => tracing::error!("failed to load todos: {err}"),
    }
    render(&list);
    print_help();

    let stdin = io::stdin();
    prompt();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim();
        let (command, rest) = match input.split_once(' ') {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => render(&list),
            "add" => {
                // "add <title> :: <description>"; the description is optional
                let (title, description) = match rest.split_once("::") {
                    Some((title, description)) => {
                        (title.trim(), Some(description.trim().to_string()))
                    }
                    None => (rest, None),
                };
                form.title = title.to_string();
                form.description = description;

                if !form.is_submittable() {
                    println!("usage: add <title> [:: <description>]");
                } else {
                    match api.create(&form.as_input()).await {
                        Ok(todo) => {
                            list.apply(ListEvent::Created(todo));
                            form.reset();
                            render(&list);
                        }
                        Err(err) => tracing::error!("failed to create todo: {err}"),
                    }
                }
            }
            "toggle" => {
                if let Some(id) = parse_id(rest) {
                    match api.toggle(id).await {
                        Ok(todo) => {
                            list.apply(ListEvent::Updated(todo));
                            render(&list);
                        }
                        Err(err) => tracing::error!("failed to toggle todo: {err}"),
                    }
                }
            }
            "done" | "undone" => {
                if let Some(id) = parse_id(rest) {
                    let patch = UpdateTodoSchema {
                        completed: Some(command == "done"),
                        ..Default::default()
                    };
                    send_update(&api, &mut list, id, patch).await;
                }
            }
            "title" => {
                let (id, title) = match rest.split_once(' ') {
                    Some((id, title)) => (parse_id(id), title.trim()),
                    None => (None, ""),
                };
                if title.is_empty() {
                    println!("usage: title <id> <new title>");
                } else if let Some(id) = id {
                    let patch = UpdateTodoSchema {
                        title: Some(title.to_string()),
                        ..Default::default()
                    };
                    send_update(&api, &mut list, id, patch).await;
                }
            }
            "desc" => {
                // "desc <id> <text>" sets the description, "desc <id>" clears it
                let (id, description) = match rest.split_once(' ') {
                    Some((id, description)) => (parse_id(id), Patch::Set(description.trim().to_string())),
                    None => (parse_id(rest), Patch::Clear),
                };
                if let Some(id) = id {
                    let patch = UpdateTodoSchema {
                        description,
                        ..Default::default()
                    };
                    send_update(&api, &mut list, id, patch).await;
                }
            }
            "rm" => {
                if let Some(id) = parse_id(rest) {
                    match api.delete(id).await {
                        Ok(result) => {
                            if !result.success {
                                println!("no todo with id {id}");
                            }
                            list.apply(ListEvent::Deleted {
                                id,
                                success: result.success,
                            });
                            render(&list);
                        }
                        Err(err) => tracing::error!("failed to delete todo: {err}"),
                    }
                }
            }
            other => println!("unknown command: {other} (try 'help')"),
        }

        prompt();
    }
}

async fn send_update(api: &TodoApi, list: &mut TodoList, id: i64, patch: UpdateTodoSchema) {
    match api.update(id, &patch).await {
        Ok(todo) => {
            list.apply(ListEvent::Updated(todo));
            render(list);
        }
        Err(err) => tracing::error!("failed to update todo: {err}"),
    }
}

fn parse_id(input: &str) -> Option<i64> {
    match input.parse() {
        Ok(id) => Some(id),
        Err(_) => {
            println!("expected a numeric todo id, got '{input}'");
            None
        }
    }
}

fn render(list: &TodoList) {
    if list.is_empty() {
        println!("no todos yet");
        return;
    }
    for todo in list.todos() {
        let status = if todo.completed { "✓" } else { " " };
        println!("  [{}] #{} {}", status, todo.id, todo.title);
        if let Some(description) = &todo.description {
            println!("          {description}");
        }
    }
    println!("{} of {} completed", list.completed_count(), list.len());
}

fn print_help() {
    println!("commands:");
    println!("  list                      show the todo list");
    println!("  add <title> [:: <desc>]   create a todo");
    println!("  toggle <id>               flip completion");
    println!("  done <id> / undone <id>   set completion explicitly");
    println!("  title <id> <new title>    rename a todo");
    println!("  desc <id> [text]          set the description, or clear it");
    println!("  rm <id>                   delete a todo");
    println!("  quit                      exit");
}

fn prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
