use crate::common::{key, line_texts, project, render_to_string, todo};
use crossterm::event::KeyCode;
use todos::config::UiConfig;
use todos::entities::TodoStatus;
use todos::icons::IconTheme;
use todos::service::{Project, Todo, TodoPatch};
use todos::ui::components::TodoListComponent;
use todos::ui::core::{Action, Component, Effect};

fn loaded_list(titles: &[&str]) -> (TodoListComponent, Project, Vec<Todo>) {
    let project = project("demo");
    let mut list = TodoListComponent::new(project.clone(), &UiConfig::default());
    let todos: Vec<Todo> = titles.iter().map(|t| todo(project.id, t, TodoStatus::Open)).collect();
    list.update(Action::TodosLoaded {
        project_id: project.id,
        result: Ok(todos.clone()),
    });
    (list, project, todos)
}

fn press(list: &mut TodoListComponent, code: KeyCode) -> Action {
    list.handle_key_events(key(code))
}

fn type_text(list: &mut TodoListComponent, text: &str) {
    for c in text.chars() {
        press(list, KeyCode::Char(c));
    }
}

fn texts(list: &TodoListComponent) -> Vec<String> {
    line_texts(&list.lines())
}

#[test]
fn test_initial_load() {
    let project = project("demo");
    let mut list = TodoListComponent::new(project.clone(), &UiConfig::default());

    assert_eq!(list.init(), Action::Run(Effect::LoadTodos { project_id: project.id }));
    let lines = texts(&list);
    assert_eq!(lines[0], "todo - demo (0 open)");
    assert!(lines.contains(&"Loading todos...".to_string()));
}

#[test]
fn test_empty_state() {
    let (list, _, _) = loaded_list(&[]);
    let lines = texts(&list);
    assert_eq!(lines[2], "> [+] ");
    assert_eq!(lines[3], "No todos yet. Add one above!");
}

#[test]
fn test_rows_render() {
    let (mut list, _, todos) = loaded_list(&["write docs", "ship it"]);
    let lines = texts(&list);

    assert_eq!(lines[3], "─".repeat(41));
    assert_eq!(lines[4], format!("  [ ] write docs {}", todos[0].short_id()));
    assert_eq!(lines[5], format!("  [ ] ship it {}", todos[1].short_id()));

    press(&mut list, KeyCode::Down);
    let lines = texts(&list);
    assert_eq!(lines[2], "  [+] Add new todo...");
    assert!(lines[4].starts_with("> [ ] write docs"));
}

#[test]
fn test_input_row_takes_letters_and_space() {
    let (mut list, _, _) = loaded_list(&["a"]);

    type_text(&mut list, "q j k");
    assert_eq!(list.new_todo_text(), "q j k");
    assert_eq!(list.selected_index(), 0);

    press(&mut list, KeyCode::Backspace);
    press(&mut list, KeyCode::Home);
    press(&mut list, KeyCode::Delete);
    assert_eq!(list.new_todo_text(), " j ");
}

#[test]
fn test_add_selects_the_new_row() {
    let (mut list, project, _) = loaded_list(&["older"]);

    type_text(&mut list, "  Buy milk ");
    let action = press(&mut list, KeyCode::Enter);
    assert_eq!(
        action,
        Action::Run(Effect::AddTodo {
            project_id: project.id,
            title: "Buy milk".to_string()
        })
    );
    assert_eq!(list.new_todo_text(), "");

    let created = todo(project.id, "Buy milk", TodoStatus::Open);
    list.update(Action::TodoAdded {
        project_id: project.id,
        result: Ok(created.clone()),
    });
    assert_eq!(list.selected_index(), 1);
    assert_eq!(list.sync().todos()[0], created);
}

#[test]
fn test_blank_add_keeps_buffer() {
    let (mut list, _, _) = loaded_list(&[]);
    type_text(&mut list, "   ");
    assert_eq!(press(&mut list, KeyCode::Enter), Action::None);
    assert_eq!(list.new_todo_text(), "   ");
}

#[test]
fn test_failed_add_keeps_selection() {
    let (mut list, project, _) = loaded_list(&["a"]);
    list.update(Action::TodoAdded {
        project_id: project.id,
        result: Err("disk full".to_string()),
    });
    assert_eq!(list.selected_index(), 0);
    assert!(texts(&list).contains(&"Error: disk full".to_string()));
}

#[test]
fn test_navigation_is_clamped() {
    let (mut list, _, _) = loaded_list(&["a", "b"]);

    press(&mut list, KeyCode::Up);
    assert_eq!(list.selected_index(), 0);

    for _ in 0..5 {
        press(&mut list, KeyCode::Down);
    }
    assert_eq!(list.selected_index(), 2);

    press(&mut list, KeyCode::Char('k'));
    assert_eq!(list.selected_index(), 1);
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index(), 2);
}

#[test]
fn test_view_level_keys() {
    let (mut list, _, _) = loaded_list(&["a"]);

    assert_eq!(press(&mut list, KeyCode::Left), Action::SwitchToProjects);
    assert_eq!(press(&mut list, KeyCode::Esc), Action::Quit);

    press(&mut list, KeyCode::Down);
    assert_eq!(press(&mut list, KeyCode::Left), Action::SwitchToProjects);
    assert_eq!(press(&mut list, KeyCode::Char('q')), Action::Quit);
    assert_eq!(press(&mut list, KeyCode::Esc), Action::Quit);
    assert_eq!(list.selected_index(), 1);
}

#[test]
fn test_refresh_key() {
    let (mut list, project, _) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);
    assert_eq!(
        press(&mut list, KeyCode::Char('r')),
        Action::Run(Effect::LoadTodos { project_id: project.id })
    );
    assert!(list.sync().is_loading());
}

#[test]
fn test_toggle_requests_next_status() {
    let (mut list, project, todos) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);

    assert_eq!(
        press(&mut list, KeyCode::Char(' ')),
        Action::Run(Effect::UpdateTodo {
            project_id: project.id,
            todo_id: todos[0].id,
            patch: TodoPatch::status(TodoStatus::InProgress)
        })
    );
}

#[test]
fn test_edit_submit_leaves_edit_mode_immediately() {
    let (mut list, project, todos) = loaded_list(&["a", "b"]);
    press(&mut list, KeyCode::Down);

    press(&mut list, KeyCode::Char('e'));
    assert_eq!(list.editing_index(), Some(1));
    assert_eq!(list.edit_text(), Some("a"));

    // Navigation keys do not move the selection while editing
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Char('j'));
    assert_eq!(list.selected_index(), 1);
    assert_eq!(list.edit_text(), Some("aj"));

    let action = press(&mut list, KeyCode::Enter);
    assert_eq!(
        action,
        Action::Run(Effect::UpdateTodo {
            project_id: project.id,
            todo_id: todos[0].id,
            patch: TodoPatch::title("aj")
        })
    );
    assert_eq!(list.editing_index(), None);
}

#[test]
fn test_enter_on_row_starts_editing() {
    let (mut list, _, _) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Enter);
    assert_eq!(list.editing_index(), Some(1));
    assert!(texts(&list).contains(&"enter save  esc cancel".to_string()));
}

#[test]
fn test_blank_edit_is_a_cancel() {
    let (mut list, _, todos) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Char('e'));
    press(&mut list, KeyCode::Backspace);
    type_text(&mut list, "   ");

    assert_eq!(press(&mut list, KeyCode::Enter), Action::None);
    assert_eq!(list.editing_index(), None);
    assert_eq!(list.sync().todos()[0], todos[0]);
}

#[test]
fn test_escape_cancels_edit_without_quitting() {
    let (mut list, _, _) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Char('e'));
    type_text(&mut list, "xyz");

    assert_eq!(press(&mut list, KeyCode::Esc), Action::None);
    assert_eq!(list.editing_index(), None);
    assert_eq!(list.edit_text(), None);
    assert_eq!(list.sync().todos()[0].title, "a");
}

#[test]
fn test_delete_last_row_clamps_selection() {
    let (mut list, project, todos) = loaded_list(&["a", "b", "c"]);
    for _ in 0..3 {
        press(&mut list, KeyCode::Down);
    }
    assert_eq!(list.selected_index(), 3);

    let action = press(&mut list, KeyCode::Char('d'));
    assert_eq!(
        action,
        Action::Run(Effect::DeleteTodo {
            project_id: project.id,
            todo_id: todos[2].id
        })
    );

    list.update(Action::TodoDeleted {
        project_id: project.id,
        todo_id: todos[2].id,
        result: Ok(true),
    });
    assert_eq!(list.selected_index(), 2);
}

#[test]
fn test_delete_only_row_returns_to_input() {
    let (mut list, project, todos) = loaded_list(&["only"]);
    press(&mut list, KeyCode::Down);
    assert!(matches!(press(&mut list, KeyCode::Char('x')), Action::Run(Effect::DeleteTodo { .. })));

    list.update(Action::TodoDeleted {
        project_id: project.id,
        todo_id: todos[0].id,
        result: Ok(true),
    });
    assert_eq!(list.selected_index(), 0);
    assert!(list.sync().is_empty());
}

#[test]
fn test_deleting_the_edited_row_leaves_edit_mode() {
    let (mut list, project, todos) = loaded_list(&["a", "b"]);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Char('e'));
    assert_eq!(list.editing_index(), Some(2));

    list.update(Action::TodoDeleted {
        project_id: project.id,
        todo_id: todos[1].id,
        result: Ok(true),
    });
    assert_eq!(list.editing_index(), None);
    assert_eq!(list.selected_index(), 1);
}

#[test]
fn test_edit_follows_its_todo_when_rows_shift() {
    let (mut list, project, _) = loaded_list(&["a"]);
    press(&mut list, KeyCode::Down);
    press(&mut list, KeyCode::Char('e'));

    list.update(Action::TodoAdded {
        project_id: project.id,
        result: Ok(todo(project.id, "newer", TodoStatus::Open)),
    });
    assert_eq!(list.editing_index(), Some(2));
    assert_eq!(list.edit_text(), Some("a"));
}

#[test]
fn test_mutation_error_is_advisory() {
    let (mut list, project, todos) = loaded_list(&["a"]);
    list.update(Action::TodoUpdated {
        project_id: project.id,
        todo_id: todos[0].id,
        result: Err("database is locked".to_string()),
    });

    let lines = texts(&list);
    assert!(lines[4].contains("[ ] a"));
    assert!(lines.contains(&"Error: database is locked".to_string()));

    // Navigation keeps working
    press(&mut list, KeyCode::Down);
    assert_eq!(list.selected_index(), 1);
}

#[test]
fn test_load_failure_replaces_body() {
    let project = project("demo");
    let mut list = TodoListComponent::new(project.clone(), &UiConfig::default());
    list.update(Action::TodosLoaded {
        project_id: project.id,
        result: Err("no such table: todos".to_string()),
    });

    let lines = texts(&list);
    assert_eq!(lines[3], "Error: no such table: todos");
    assert!(!list.sync().is_loading());
}

#[test]
fn test_stale_project_results_are_ignored() {
    let (mut list, _, _) = loaded_list(&["a"]);
    let other = project("other");
    list.update(Action::TodosLoaded {
        project_id: other.id,
        result: Ok(Vec::new()),
    });
    assert_eq!(list.sync().len(), 1);
}

#[test]
fn test_header_shows_stats() {
    let project = project("demo");
    let mut list = TodoListComponent::new(project.clone(), &UiConfig::default());
    list.update(Action::TodosLoaded {
        project_id: project.id,
        result: Ok(vec![
            todo(project.id, "a", TodoStatus::Open),
            todo(project.id, "b", TodoStatus::InProgress),
            todo(project.id, "c", TodoStatus::Done),
        ]),
    });
    assert_eq!(texts(&list)[0], "todo - demo (1 open, 1 in progress, 1 done)");
}

#[test]
fn test_ui_options() {
    let project = project("demo");
    let ui = UiConfig {
        icon_theme: IconTheme::Unicode,
        show_ids: false,
    };
    let mut list = TodoListComponent::new(project.clone(), &ui);
    list.update(Action::TodosLoaded {
        project_id: project.id,
        result: Ok(vec![todo(project.id, "finished", TodoStatus::Done)]),
    });
    assert_eq!(texts(&list)[4], "  ● finished");
}

#[test]
fn test_set_project() {
    let (mut list, current, _) = loaded_list(&["a"]);
    type_text(&mut list, "draft");

    assert_eq!(list.set_project(current.clone()), Action::None);
    assert_eq!(list.new_todo_text(), "draft");
    assert_eq!(list.sync().len(), 1);

    let other = project("other");
    assert_eq!(
        list.set_project(other.clone()),
        Action::Run(Effect::LoadTodos { project_id: other.id })
    );
    assert_eq!(list.project().id, other.id);
    assert_eq!(list.new_todo_text(), "");
    assert_eq!(list.selected_index(), 0);
    assert!(list.sync().is_loading());
}

#[test]
fn test_render_places_rows() {
    let (mut list, _, _) = loaded_list(&["render me"]);
    let screen = render_to_string(&mut list, 60, 12);
    assert!(screen.starts_with("todo - demo (1 open)"));
    assert!(screen.contains("> [+]"));
    assert!(screen.contains("  [ ] render me"));
}
