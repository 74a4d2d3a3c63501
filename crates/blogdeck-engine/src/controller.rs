//! Screen state machine for the blog manager.
//!
//! One [`ViewController`] owns the current [`Screen`], the loaded post
//! collection and the search state. Every API failure is caught here (or in
//! the form/viewer it delegates to) and turned into a [`Notice`]; nothing
//! escapes to the caller.

use blogdeck_client::PostsApi;
use blogdeck_types::{Post, PostId, SearchField};
use serde::Serialize;

use crate::analytics::AnalyticsSnapshot;
use crate::form::{PostForm, SubmitOutcome};
use crate::notice::Notice;
use crate::viewer::PostViewer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Home,
    Posts,
    Create,
    Edit,
    View,
    Analytics,
}

impl ViewMode {
    pub const ALL: [ViewMode; 6] = [
        ViewMode::Home,
        ViewMode::Posts,
        ViewMode::Create,
        ViewMode::Edit,
        ViewMode::View,
        ViewMode::Analytics,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Home => "home",
            ViewMode::Posts => "posts",
            ViewMode::Create => "create",
            ViewMode::Edit => "edit",
            ViewMode::View => "view",
            ViewMode::Analytics => "analytics",
        }
    }
}

/// Current screen with the state that only exists while it is shown.
///
/// `Edit(None)` and `View(None)` are reachable through direct navigation and
/// render the not-found fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    Posts,
    Create(PostForm),
    Edit(Option<PostForm>),
    View(Option<PostViewer>),
    Analytics(Option<AnalyticsSnapshot>),
}

impl Screen {
    pub fn mode(&self) -> ViewMode {
        match self {
            Screen::Home => ViewMode::Home,
            Screen::Posts => ViewMode::Posts,
            Screen::Create(_) => ViewMode::Create,
            Screen::Edit(_) => ViewMode::Edit,
            Screen::View(_) => ViewMode::View,
            Screen::Analytics(_) => ViewMode::Analytics,
        }
    }
}

/// User intents, as produced by the TUI key map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewMode),
    SelectPost(PostId),
    EditCurrent,
    ReloadCurrent,
    TogglePublishCurrent,
    RequestDelete,
    CancelDelete,
    ConfirmDelete,
    SubmitForm,
    Back,
    SetSearchTerm(String),
    SetSearchField(SearchField),
    CycleSearchField,
    Search,
    ShowAll,
    DismissNotice,
}

pub struct ViewController<A> {
    api: A,
    screen: Screen,
    posts: Vec<Post>,
    loading: bool,
    search_term: String,
    search_field: SearchField,
    notice: Option<Notice>,
}

impl<A: PostsApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            screen: Screen::Home,
            posts: Vec::new(),
            loading: false,
            search_term: String::new(),
            search_field: SearchField::default(),
            notice: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn mode(&self) -> ViewMode {
        self.screen.mode()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn search_field(&self) -> SearchField {
        self.search_field
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// The open create/edit form, for field input
    pub fn form_mut(&mut self) -> Option<&mut PostForm> {
        match &mut self.screen {
            Screen::Create(form) => Some(form),
            Screen::Edit(form) => form.as_mut(),
            _ => None,
        }
    }

    pub fn viewer(&self) -> Option<&PostViewer> {
        match &self.screen {
            Screen::View(viewer) => viewer.as_ref(),
            _ => None,
        }
    }

    pub async fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, mode = self.mode().as_str(), "dispatch");
        match action {
            Action::Navigate(mode) => self.navigate(mode).await,
            Action::SelectPost(id) => self.select_post(id).await,
            Action::EditCurrent => self.edit_current(),
            Action::ReloadCurrent => self.reload_current().await,
            Action::TogglePublishCurrent => self.toggle_publish_current().await,
            Action::RequestDelete => self.request_delete(),
            Action::CancelDelete => self.cancel_delete(),
            Action::ConfirmDelete => self.confirm_delete().await,
            Action::SubmitForm => self.submit_form().await,
            Action::Back => self.back().await,
            Action::SetSearchTerm(term) => self.set_search_term(term),
            Action::SetSearchField(field) => self.set_search_field(field),
            Action::CycleSearchField => self.search_field = self.search_field.next(),
            Action::Search => self.run_search().await,
            Action::ShowAll => self.show_all().await,
            Action::DismissNotice => self.clear_notice(),
        }
    }

    /// Direct navigation. Edit and view without a selection show the
    /// not-found fallback.
    pub async fn navigate(&mut self, mode: ViewMode) {
        match mode {
            ViewMode::Home => self.show_home(),
            ViewMode::Posts => self.show_posts().await,
            ViewMode::Create => self.show_create(),
            ViewMode::Edit => self.screen = Screen::Edit(None),
            ViewMode::View => self.screen = Screen::View(None),
            ViewMode::Analytics => self.show_analytics().await,
        }
    }

    pub fn show_home(&mut self) {
        self.screen = Screen::Home;
    }

    /// Entering the list always reloads published posts.
    pub async fn show_posts(&mut self) {
        self.screen = Screen::Posts;
        self.load_published().await;
    }

    pub fn show_create(&mut self) {
        self.screen = Screen::Create(PostForm::create());
    }

    pub async fn show_analytics(&mut self) {
        self.screen = Screen::Analytics(None);
        self.load_published().await;

        match AnalyticsSnapshot::load(&self.api, &self.posts).await {
            Ok(snapshot) => {
                if let Screen::Analytics(slot) = &mut self.screen {
                    *slot = Some(snapshot);
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load analytics");
                self.notice = Some(Notice::error(
                    "Failed to load analytics data. Please try again.",
                ));
            }
        }
    }

    /// Open a post from the list; fetches it once (counts a view).
    pub async fn select_post(&mut self, id: PostId) {
        let mut viewer = match std::mem::replace(&mut self.screen, Screen::Posts) {
            Screen::View(Some(mut viewer)) => {
                viewer.retarget(id);
                viewer
            }
            _ => PostViewer::new(id),
        };
        viewer.ensure_loaded(&self.api).await;
        if let Some(message) = viewer.error() {
            self.notice = Some(Notice::error(message));
        }
        self.screen = Screen::View(Some(viewer));
    }

    /// Re-view the current post; counts another view.
    pub async fn reload_current(&mut self) {
        if let Screen::View(Some(viewer)) = &mut self.screen {
            viewer.reload(&self.api).await;
        }
    }

    pub fn edit_current(&mut self) {
        let Some(post) = self.viewer().and_then(PostViewer::post) else {
            tracing::debug!("edit requested without a loaded post");
            return;
        };
        self.screen = Screen::Edit(PostForm::edit(post));
    }

    pub async fn toggle_publish_current(&mut self) {
        let Screen::View(Some(viewer)) = &mut self.screen else {
            return;
        };
        let Some(id) = viewer.post().and_then(|p| p.id) else {
            return;
        };

        match self.api.toggle_publish(id).await {
            Ok(post) => {
                let message = if post.published {
                    "Post published"
                } else {
                    "Post moved to drafts"
                };
                viewer.replace_post(post);
                self.notice = Some(Notice::success(message));
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to toggle publish");
                self.notice = Some(Notice::error("Failed to update post"));
            }
        }
    }

    pub fn request_delete(&mut self) {
        if let Screen::View(Some(viewer)) = &mut self.screen {
            viewer.request_delete();
        }
    }

    pub fn cancel_delete(&mut self) {
        if let Screen::View(Some(viewer)) = &mut self.screen {
            viewer.cancel_delete();
        }
    }

    /// Delete the viewed post, then return to a freshly loaded list.
    pub async fn confirm_delete(&mut self) {
        let Screen::View(Some(viewer)) = &mut self.screen else {
            return;
        };
        let Some(id) = viewer.delete_target() else {
            return;
        };

        match self.api.delete_post(id).await {
            Ok(()) => {
                tracing::info!(%id, "post deleted");
                self.posts.retain(|p| p.id != Some(id));
                self.show_posts().await;
                if !self.notice.as_ref().is_some_and(Notice::is_error) {
                    self.notice = Some(Notice::success("Post deleted"));
                }
            }
            Err(err) => {
                tracing::error!(%id, error = %err, "failed to delete post");
                viewer.cancel_delete();
                self.notice = Some(Notice::error("Failed to delete post"));
            }
        }
    }

    pub async fn submit_form(&mut self) {
        let form = match &mut self.screen {
            Screen::Create(form) => form,
            Screen::Edit(Some(form)) => form,
            _ => return,
        };
        let editing = form.is_edit();

        if let SubmitOutcome::Saved(post) = form.submit(&self.api).await {
            tracing::info!(id = ?post.id, editing, "post saved");
            self.show_posts().await;
            if !self.notice.as_ref().is_some_and(Notice::is_error) {
                self.notice = Some(Notice::success(if editing {
                    "Post updated"
                } else {
                    "Post created"
                }));
            }
        }
    }

    /// Back / cancel. Forms and the single-post view return to the list,
    /// the list and analytics return home.
    pub async fn back(&mut self) {
        match self.screen {
            Screen::Home => {}
            Screen::Posts | Screen::Analytics(_) => self.show_home(),
            Screen::View(Some(ref viewer)) if viewer.is_confirming_delete() => {
                self.cancel_delete()
            }
            Screen::Create(_) | Screen::Edit(_) | Screen::View(_) => self.show_posts().await,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_search_field(&mut self, field: SearchField) {
        self.search_field = field;
    }

    /// Search by the selected field. A blank term clears the search and
    /// reloads published posts.
    pub async fn run_search(&mut self) {
        if self.search_term.trim().is_empty() {
            self.load_published().await;
            return;
        }

        self.loading = true;
        match self.api.search(self.search_field, &self.search_term).await {
            Ok(posts) => {
                self.posts = posts;
                self.notice = None;
            }
            Err(err) => {
                tracing::error!(field = %self.search_field, error = %err, "search failed");
                self.notice = Some(Notice::error("Failed to search posts"));
            }
        }
        self.loading = false;
    }

    /// Clear the search term and reload the published list.
    pub async fn show_all(&mut self) {
        self.search_term.clear();
        self.load_published().await;
    }

    async fn load_published(&mut self) {
        self.loading = true;
        match self.api.get_published_posts().await {
            Ok(posts) => self.posts = posts,
            Err(err) => {
                tracing::error!(error = %err, "failed to load posts");
                self.notice = Some(Notice::error("Failed to load posts"));
            }
        }
        self.loading = false;
    }
}
