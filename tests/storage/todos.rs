use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use todos::entities::TodoStatus;
use todos::service::{LocalService, NewTodo, Project, ProjectService, ServiceError, TodoPatch, TodoService};
use todos::storage::LocalStorage;
use uuid::Uuid;

async fn setup() -> (LocalService, Project) {
    let service = LocalService::new(Arc::new(LocalStorage::in_memory().await.unwrap()));
    let project = service.get_or_create_project(Path::new("/w/demo")).await.unwrap();
    (service, project)
}

fn new_todo(title: &str) -> NewTodo {
    NewTodo {
        title: title.to_string(),
    }
}

#[tokio::test]
async fn test_add_trims_and_starts_open() {
    let (service, project) = setup().await;

    let todo = service.add(project.id, new_todo("  Buy milk  ")).await.unwrap();
    assert_eq!(todo.title, "Buy milk");
    assert_eq!(todo.status, TodoStatus::Open);
    assert_eq!(todo.project_id, project.id);
}

#[tokio::test]
async fn test_add_rejects_blank_title() {
    let (service, project) = setup().await;
    let result = service.add(project.id, new_todo("   ")).await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    assert!(service.list(project.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_to_unknown_project() {
    let (service, _) = setup().await;
    let result = service.add(Uuid::new_v4(), new_todo("orphan")).await;
    assert!(matches!(result, Err(ServiceError::NotFound(_))));
}

#[tokio::test]
async fn test_list_newest_first() {
    let (service, project) = setup().await;
    for title in ["first", "second", "third"] {
        service.add(project.id, new_todo(title)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let titles: Vec<String> = service
        .list(project.id)
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn test_update_title_and_status() {
    let (service, project) = setup().await;
    let todo = service.add(project.id, new_todo("draft")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let renamed = service
        .update(todo.id, TodoPatch::title("  final  "))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.title, "final");
    assert_eq!(renamed.status, TodoStatus::Open);
    assert!(renamed.updated_at > todo.updated_at);

    let done = service
        .update(todo.id, TodoPatch::status(TodoStatus::Done))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.title, "final");
    assert_eq!(done.status, TodoStatus::Done);

    let stored = service.list(project.id).await.unwrap();
    assert_eq!(stored[0].id, done.id);
    assert_eq!(stored[0].status, TodoStatus::Done);
}

#[tokio::test]
async fn test_update_rejects_blank_title() {
    let (service, project) = setup().await;
    let todo = service.add(project.id, new_todo("keep")).await.unwrap();

    let result = service.update(todo.id, TodoPatch::title(" ")).await;
    assert!(matches!(result, Err(ServiceError::InvalidInput(_))));
    assert_eq!(service.list(project.id).await.unwrap()[0].title, "keep");
}

#[tokio::test]
async fn test_update_unknown_todo() {
    let (service, _) = setup().await;
    let result = service
        .update(Uuid::new_v4(), TodoPatch::status(TodoStatus::Done))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete() {
    let (service, project) = setup().await;
    let todo = service.add(project.id, new_todo("gone soon")).await.unwrap();

    assert!(service.delete(todo.id).await.unwrap());
    assert!(service.list(project.id).await.unwrap().is_empty());

    // Second delete finds nothing
    assert!(!service.delete(todo.id).await.unwrap());
}
