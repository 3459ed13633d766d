//! The viewer's event loop state: post list, session and to-do list.

use std::sync::Arc;

use postboard_core::domain::TodoList;
use postboard_core::ports::{AuthApi, PostApi};
use postboard_core::view::{AddPostOutcome, FetchOutcome, LoginOutcome};
use postboard_core::{PostViewModel, SessionModel};

use crate::command::{Command, HELP};
use crate::render::{ListView, render_list, render_todos};

/// Result of handling one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct ViewerApp {
    posts: PostViewModel<dyn PostApi>,
    session: SessionModel<dyn AuthApi>,
    todos: TodoList,
}

impl ViewerApp {
    pub fn new(posts_api: Arc<dyn PostApi>, auth_api: Arc<dyn AuthApi>) -> Self {
        Self {
            posts: PostViewModel::new(posts_api),
            session: SessionModel::new(auth_api),
            todos: TodoList::new(),
        }
    }

    pub fn posts(&self) -> &PostViewModel<dyn PostApi> {
        &self.posts
    }

    /// Fetch and render, as on first mount.
    pub async fn refresh(&self) -> String {
        let note = match self.posts.fetch_posts().await {
            FetchOutcome::Failed => "Could not load posts, showing the last list.\n",
            FetchOutcome::Applied { .. } | FetchOutcome::Stale => "",
        };
        format!("{}{}", note, self.render().await)
    }

    pub async fn render(&self) -> String {
        let posts = self.posts.posts().await;
        let search_text = self.posts.search_text().await;
        let user = self.session.email().await;

        render_list(&ListView {
            posts: &posts,
            total: self.posts.total().await,
            loading: self.posts.is_loading(),
            search_text: &search_text,
            sort_key: self.posts.sort_key().await,
            user: user.as_deref(),
        })
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        let output = match command {
            Command::List => self.render().await,
            Command::Search(text) => {
                self.posts.set_search_text(text).await;
                self.render().await
            }
            Command::Sort(key) => {
                self.posts.set_sort_key(key).await;
                self.render().await
            }
            Command::Title(text) => {
                self.posts.set_title_input(text).await;
                format!("Title set to {:?}", self.posts.title_input().await)
            }
            Command::Add(title) => {
                if let Some(title) = title {
                    self.posts.set_title_input(title).await;
                }
                match self.posts.submit_title_input().await {
                    AddPostOutcome::Created => self.render().await,
                    AddPostOutcome::Skipped => "Type a title first.".to_string(),
                    AddPostOutcome::Rejected { status } => {
                        format!("Server refused the post (status {}).", status)
                    }
                    AddPostOutcome::Failed => "Could not reach the server.".to_string(),
                }
            }
            Command::Refresh => self.refresh().await,
            Command::Login { email, password } => {
                match self.session.login(&email, &password).await {
                    LoginOutcome::LoggedIn => format!("Hello, {}", email),
                    LoginOutcome::InvalidEmail => "Invalid email format".to_string(),
                    LoginOutcome::Rejected { .. } => {
                        "Login failed: check your email or password".to_string()
                    }
                    LoginOutcome::Failed => "Failed to connect to server".to_string(),
                }
            }
            Command::Logout => {
                self.session.logout().await;
                "Logged out.".to_string()
            }
            Command::TodoAdd(item) => {
                self.todos.add(item);
                render_todos(&self.todos)
            }
            Command::TodoRemove(index) => match self.todos.remove(index) {
                Some(_) => render_todos(&self.todos),
                None => format!("No to-do at index {}.", index),
            },
            Command::TodoList => render_todos(&self.todos),
            Command::Help => HELP.to_string(),
            Command::Quit => return Flow::Quit,
        };

        Flow::Continue(output)
    }
}
