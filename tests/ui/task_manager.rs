use crate::common::{MockService, Op};
use todos::entities::TodoStatus;
use todos::ui::core::{Action, Effect, TaskManager};

#[tokio::test]
async fn test_spawned_effect_reports_back() {
    let mock = MockService::new();
    let project = mock.add_project("shop", "/work/shop");
    let seeded = mock.seed_todo(project.id, "a", TodoStatus::Open);

    let (mut manager, mut rx) = TaskManager::new(mock.services());
    let first = manager.spawn(Effect::LoadTodos { project_id: project.id });
    let second = manager.spawn(Effect::LoadProjects);
    assert_ne!(first, second);
    assert_eq!(manager.pending_results(), 2);

    let mut received = Vec::new();
    for _ in 0..2 {
        received.push(rx.recv().await.unwrap());
        manager.result_received();
    }
    assert_eq!(manager.pending_results(), 0);

    assert!(received.contains(&Action::TodosLoaded {
        project_id: project.id,
        result: Ok(vec![seeded]),
    }));
    assert!(received.iter().all(Action::is_effect_result));
}

#[tokio::test]
async fn test_service_errors_become_messages() {
    let mock = MockService::new();
    let project = mock.add_project("shop", "/work/shop");
    mock.fail(Op::Add);

    let (mut manager, mut rx) = TaskManager::new(mock.services());
    manager.spawn(Effect::AddTodo {
        project_id: project.id,
        title: "never stored".to_string(),
    });

    match rx.recv().await.unwrap() {
        Action::TodoAdded { project_id, result } => {
            assert_eq!(project_id, project.id);
            assert!(result.unwrap_err().contains("injected"));
        }
        other => panic!("unexpected action {:?}", other),
    }
    assert!(mock.todos_of(project.id).is_empty());
}

#[tokio::test]
async fn test_cancel_all_tasks() {
    let mock = MockService::new();
    let (mut manager, _rx) = TaskManager::new(mock.services());
    manager.spawn(Effect::LoadProjects);
    assert_eq!(manager.task_count(), 1);

    manager.cancel_all_tasks();
    assert_eq!(manager.task_count(), 0);
    assert_eq!(manager.pending_results(), 0);
}

#[test]
fn test_effect_descriptions() {
    let effect = Effect::AddTodo {
        project_id: uuid::Uuid::new_v4(),
        title: "Buy milk".to_string(),
    };
    assert_eq!(effect.describe(), "Add todo 'Buy milk'");
    assert_eq!(Effect::LoadProjects.describe(), "Load projects");
}
