//! Router between the controller's current screen and its component.

use blogdeck_client::PostsApi;
use blogdeck_engine::{Action, Screen, ViewController, ViewMode};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::presentation::presenters::tui::{
    build_analytics, build_post_form, build_post_list, build_post_view, build_status_bar,
};
use crate::presentation::views::tui::components::ctrl;
use crate::presentation::views::tui::{
    AnalyticsComponent, HomeComponent, NotFoundComponent, PostFormComponent, PostListComponent,
    PostViewComponent, StatusBarView,
};

const MISSING_POST: &str = "The post you're looking for doesn't exist.";

pub(crate) enum Signal {
    Quit,
    Dispatch(Action),
}

pub(crate) struct App {
    home: HomeComponent,
    list: PostListComponent,
    form: PostFormComponent,
    viewer: PostViewComponent,
    analytics: AnalyticsComponent,
    not_found: NotFoundComponent,
    last_mode: ViewMode,
}

impl App {
    pub fn new() -> Self {
        Self {
            home: HomeComponent::new(),
            list: PostListComponent::new(),
            form: PostFormComponent::new(),
            viewer: PostViewComponent::new(),
            analytics: AnalyticsComponent::new(),
            not_found: NotFoundComponent::new(),
            last_mode: ViewMode::Home,
        }
    }

    /// Reset per-visit UI state when the screen changes
    fn sync_mode(&mut self, mode: ViewMode) {
        if mode == self.last_mode {
            return;
        }
        match mode {
            ViewMode::Create | ViewMode::Edit => self.form.reset(),
            ViewMode::View => self.viewer.reset(),
            _ => {}
        }
        self.last_mode = mode;
    }

    pub fn handle_key<A: PostsApi>(
        &mut self,
        key: KeyEvent,
        controller: &mut ViewController<A>,
    ) -> Option<Signal> {
        if ctrl(&key, 'c') {
            return Some(Signal::Quit);
        }

        let mode = controller.mode();
        self.sync_mode(mode);

        let capturing_text = match mode {
            ViewMode::Create | ViewMode::Edit => controller.form_mut().is_some(),
            ViewMode::Posts => self.list.is_editing(),
            _ => false,
        };
        if !capturing_text && key.code == KeyCode::Char('q') {
            return Some(Signal::Quit);
        }

        let action = match mode {
            ViewMode::Home => self.home.handle_input(key),
            ViewMode::Posts => {
                self.list
                    .handle_input(key, controller.posts(), controller.search_term())
            }
            ViewMode::Create | ViewMode::Edit => match controller.form_mut() {
                Some(form) => self.form.handle_input(key, form),
                None => self.not_found.handle_input(key),
            },
            ViewMode::View => match controller.viewer() {
                Some(viewer) if viewer.post().is_some() => self
                    .viewer
                    .handle_input(key, viewer.is_confirming_delete()),
                _ => self.not_found.handle_input(key),
            },
            ViewMode::Analytics => self.analytics.handle_input(key),
        };
        action.map(Signal::Dispatch)
    }

    pub fn draw<A: PostsApi>(&mut self, f: &mut Frame, controller: &ViewController<A>, busy: bool) {
        self.sync_mode(controller.mode());

        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(f.area());
        let (main, footer) = (chunks[0], chunks[1]);

        let hints = match controller.screen() {
            Screen::Home => {
                self.home.render(f, main);
                HomeComponent::HINTS
            }
            Screen::Posts => {
                let data = build_post_list(controller, self.list.is_editing());
                self.list.render(f, main, &data);
                self.list.hints()
            }
            Screen::Create(form) | Screen::Edit(Some(form)) => {
                let focus = self.form.focus(form.step());
                let data = build_post_form(form, focus);
                self.form.render(f, main, &data);
                PostFormComponent::HINTS
            }
            Screen::Edit(None) => {
                self.not_found.render(f, main, MISSING_POST);
                NotFoundComponent::HINTS
            }
            Screen::View(Some(viewer)) => match build_post_view(viewer) {
                Some(data) => {
                    self.viewer.render(f, main, &data);
                    if data.confirming_delete {
                        PostViewComponent::CONFIRM_HINTS
                    } else {
                        PostViewComponent::HINTS
                    }
                }
                None => {
                    self.not_found
                        .render(f, main, viewer.error().unwrap_or(MISSING_POST));
                    NotFoundComponent::HINTS
                }
            },
            Screen::View(None) => {
                self.not_found.render(f, main, MISSING_POST);
                NotFoundComponent::HINTS
            }
            Screen::Analytics(snapshot) => {
                let data = build_analytics(snapshot.as_ref());
                self.analytics.render(f, main, &data);
                AnalyticsComponent::HINTS
            }
        };

        let status = build_status_bar(controller, busy, hints);
        f.render_widget(StatusBarView::new(&status), footer);
    }
}

/// Actions that may call the API and deserve a busy indicator first
pub(crate) fn hits_network(action: &Action) -> bool {
    !matches!(
        action,
        Action::Navigate(ViewMode::Home | ViewMode::Create | ViewMode::Edit)
            | Action::EditCurrent
            | Action::RequestDelete
            | Action::CancelDelete
            | Action::SetSearchTerm(_)
            | Action::SetSearchField(_)
            | Action::CycleSearchField
            | Action::DismissNotice
    )
}
