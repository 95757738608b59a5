use crate::config::Config;
use crate::service::{Project, Services};
use crate::ui::components::{ProjectsComponent, TodoListComponent};
use crate::ui::core::{
    actions::Action,
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};
use ratatui::{layout::Rect, Frame};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Todos,
    Projects,
}

/// Application shell: owns both views, routes keys to the active one and
/// runs the effects they request.
pub struct AppComponent {
    view: View,
    project: Project,

    // Component composition
    todo_list: TodoListComponent,
    projects: ProjectsComponent,

    // Services
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(services: Services, project: Project, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new(services);

        Self {
            view: View::Todos,
            todo_list: TodoListComponent::new(project.clone(), &config.ui),
            projects: ProjectsComponent::new(),
            project,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    /// Start the first load of the active project.
    pub fn init(&mut self) {
        info!("App: starting in project '{}' ({})", self.project.name, self.project.path);
        let action = self.todo_list.init();
        self.handle_action(action);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn todo_list(&self) -> &TodoListComponent {
        &self.todo_list
    }

    pub fn projects(&self) -> &ProjectsComponent {
        &self.projects
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Handle one terminal event. Returns whether the frame is now stale.
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        match event_type {
            EventType::Key(key) => {
                self.handle_key(key);
                true
            }
            EventType::Tick => self.process_background_actions(),
            EventType::Resize(_, _) => true,
            EventType::Other => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            Action::Quit
        } else {
            self.handle_key_events(key)
        };
        self.handle_action(action);
    }

    /// Apply an action: navigation here, effects to the task manager, results to their view.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => {
                info!("App: quit requested");
                self.should_quit = true;
            }
            Action::Run(effect) => {
                self.task_manager.spawn(effect);
            }
            Action::SwitchToProjects => {
                debug!("App: switching to projects view");
                self.view = View::Projects;
                let action = self.projects.open(&self.project);
                self.handle_action(action);
            }
            Action::BackToTodos => {
                debug!("App: back to todos view");
                self.view = View::Todos;
            }
            Action::SelectProject(project) => {
                self.view = View::Todos;
                if project.id != self.project.id {
                    info!("App: switching to project '{}' ({})", project.name, project.path);
                }
                self.project = project.clone();
                let action = self.todo_list.set_project(project);
                self.handle_action(action);
            }
            Action::ProjectsLoaded { .. } => {
                self.projects.update(action);
            }
            Action::TodosLoaded { .. }
            | Action::TodoAdded { .. }
            | Action::TodoUpdated { .. }
            | Action::TodoDeleted { .. } => {
                self.todo_list.update(action);
            }
        }
    }

    fn receive(&mut self, action: Action) {
        if action.is_effect_result() {
            self.task_manager.result_received();
        }
        self.handle_action(action);
    }

    /// Apply every result that has already arrived, without waiting.
    /// Returns true if anything was applied.
    pub fn process_background_actions(&mut self) -> bool {
        let mut received = false;
        while let Ok(action) = self.background_action_rx.try_recv() {
            debug!("Background: received {:?}", action);
            self.receive(action);
            received = true;
        }

        let completed = self.task_manager.cleanup_finished_tasks();
        if !completed.is_empty() {
            debug!("Background: cleaned up {} finished tasks", completed.len());
        }
        received
    }

    /// Wait for every spawned effect and apply its result.
    pub async fn settle(&mut self) {
        while self.task_manager.pending_results() > 0 {
            match self.background_action_rx.recv().await {
                Some(action) => self.receive(action),
                None => break,
            }
        }
        self.task_manager.cleanup_finished_tasks();
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match self.view {
            View::Todos => self.todo_list.handle_key_events(key),
            View::Projects => self.projects.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        self.handle_action(action);
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        match self.view {
            View::Todos => self.todo_list.render(f, rect),
            View::Projects => self.projects.render(f, rect),
        }
    }
}
