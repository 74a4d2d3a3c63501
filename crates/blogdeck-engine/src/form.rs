//! Create/edit wizard over a single in-memory draft.
//!
//! Validation only runs on submit; the per-field length counters are the
//! only thing derived on every keystroke.

use std::collections::BTreeMap;

use blogdeck_client::PostsApi;
use blogdeck_types::{NewPost, Post, PostId, PostPatch, char_len};
use serde::Serialize;

pub const TITLE_MAX: usize = 200;
pub const CONTENT_MAX: usize = 10_000;
pub const SUMMARY_MAX: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
    Summary,
    Tags,
    Content,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author",
            Field::Summary => "Summary",
            Field::Tags => "Tags",
            Field::Content => "Content",
        }
    }

    pub fn limit(self) -> Option<usize> {
        match self {
            Field::Title => Some(TITLE_MAX),
            Field::Summary => Some(SUMMARY_MAX),
            Field::Content => Some(CONTENT_MAX),
            Field::Author | Field::Tags => None,
        }
    }

    pub fn step(self) -> FormStep {
        match self {
            Field::Title | Field::Author => FormStep::BasicInfo,
            Field::Summary | Field::Tags => FormStep::Details,
            Field::Content => FormStep::Content,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    #[default]
    BasicInfo,
    Details,
    Content,
}

impl FormStep {
    pub const COUNT: usize = 3;

    /// 1-based position shown in the wizard header
    pub fn number(self) -> usize {
        match self {
            FormStep::BasicInfo => 1,
            FormStep::Details => 2,
            FormStep::Content => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormStep::BasicInfo => "Basic info",
            FormStep::Details => "Content details",
            FormStep::Content => "Main content",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            FormStep::BasicInfo => &[Field::Title, Field::Author],
            FormStep::Details => &[Field::Summary, Field::Tags],
            FormStep::Content => &[Field::Content],
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            FormStep::BasicInfo => Some(FormStep::Details),
            FormStep::Details => Some(FormStep::Content),
            FormStep::Content => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            FormStep::BasicInfo => None,
            FormStep::Details => Some(FormStep::BasicInfo),
            FormStep::Content => Some(FormStep::Details),
        }
    }
}

/// Raw form input. Optional fields are kept as (possibly empty) strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostDraft {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub tags: String,
    pub content: String,
    pub published: bool,
}

impl PostDraft {
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            author: post.author.clone().unwrap_or_default(),
            summary: post.summary.clone().unwrap_or_default(),
            tags: post.tags.clone().unwrap_or_default(),
            content: post.content.clone(),
            published: post.published,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Summary => &self.summary,
            Field::Tags => &self.tags,
            Field::Content => &self.content,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Summary => &mut self.summary,
            Field::Tags => &mut self.tags,
            Field::Content => &mut self.content,
        }
    }

    /// Create payload; blank optional fields are left out.
    pub fn to_new_post(&self) -> NewPost {
        NewPost {
            title: self.title.clone(),
            content: self.content.clone(),
            summary: non_blank(&self.summary),
            author: non_blank(&self.author),
            tags: non_blank(&self.tags),
            published: self.published,
        }
    }

    /// Update payload with the fields that differ from `original`.
    ///
    /// `published` is always included: the backend treats a missing flag as
    /// `false`.
    pub fn patch_against(&self, original: &Post) -> PostPatch {
        let changed = |now: &str, before: &str| (now != before).then(|| now.to_string());
        let before = PostDraft::from_post(original);

        PostPatch {
            title: changed(&self.title, &before.title),
            content: changed(&self.content, &before.content),
            summary: changed(&self.summary, &before.summary),
            author: changed(&self.author, &before.author),
            tags: changed(&self.tags, &before.tags),
            published: Some(self.published),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| s.to_string())
}

/// Per-field validation messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    fn remove(&mut self, field: Field) {
        self.0.remove(&field);
    }
}

fn check_required(errors: &mut FieldErrors, field: Field, value: &str, max: usize) {
    if value.trim().is_empty() {
        errors.insert(field, format!("{} is required", field.label()));
    } else if char_len(value) > max {
        errors.insert(
            field,
            format!("{} must be less than {} characters", field.label(), max),
        );
    }
}

fn check_optional(errors: &mut FieldErrors, field: Field, value: &str, max: usize) {
    if char_len(value) > max {
        errors.insert(
            field,
            format!("{} must be less than {} characters", field.label(), max),
        );
    }
}

/// Validate a complete draft.
pub fn validate_draft(draft: &PostDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_required(&mut errors, Field::Title, &draft.title, TITLE_MAX);
    check_required(&mut errors, Field::Content, &draft.content, CONTENT_MAX);
    check_optional(&mut errors, Field::Summary, &draft.summary, SUMMARY_MAX);

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate only the fields present in a partial update.
pub fn validate_patch(patch: &PostPatch) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if let Some(title) = &patch.title {
        check_required(&mut errors, Field::Title, title, TITLE_MAX);
    }
    if let Some(content) = &patch.content {
        check_required(&mut errors, Field::Content, content, CONTENT_MAX);
    }
    if let Some(summary) = &patch.summary {
        check_optional(&mut errors, Field::Summary, summary, SUMMARY_MAX);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Create,
    Edit { id: PostId, original: Post },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent
    Invalid,
    /// The backend call failed; the form is usable again
    Failed,
    Saved(Post),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PostForm {
    mode: FormMode,
    draft: PostDraft,
    step: FormStep,
    errors: FieldErrors,
    submit_error: Option<String>,
    submitting: bool,
}

impl PostForm {
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create, PostDraft::default())
    }

    /// Edit form seeded from a persisted post; `None` when the post has no id.
    pub fn edit(post: &Post) -> Option<Self> {
        let id = post.id?;
        Some(Self::with_mode(
            FormMode::Edit {
                id,
                original: post.clone(),
            },
            PostDraft::from_post(post),
        ))
    }

    fn with_mode(mode: FormMode, draft: PostDraft) -> Self {
        Self {
            mode,
            draft,
            step: FormStep::default(),
            errors: FieldErrors::default(),
            submit_error: None,
            submitting: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn draft(&self) -> &PostDraft {
        &self.draft
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace a field's value and clear its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.draft.slot(field) = value.into();
        self.errors.remove(field);
    }

    pub fn push_char(&mut self, field: Field, c: char) {
        self.draft.slot(field).push(c);
        self.errors.remove(field);
    }

    pub fn pop_char(&mut self, field: Field) {
        self.draft.slot(field).pop();
        self.errors.remove(field);
    }

    pub fn set_published(&mut self, published: bool) {
        self.draft.published = published;
    }

    pub fn toggle_published(&mut self) {
        self.draft.published = !self.draft.published;
    }

    pub fn next_step(&mut self) {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
    }

    pub fn prev_step(&mut self) {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
    }

    /// `(current length, limit)` for the counter next to a field
    pub fn counter(&self, field: Field) -> (usize, Option<usize>) {
        (char_len(self.draft.get(field)), field.limit())
    }

    /// Run validation, replacing all previous errors.
    pub fn validate(&mut self) -> bool {
        self.submit_error = None;
        match validate_draft(&self.draft) {
            Ok(()) => {
                self.errors = FieldErrors::default();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    pub async fn submit<A: PostsApi>(&mut self, api: &A) -> SubmitOutcome {
        if !self.validate() {
            tracing::debug!(errors = self.errors.len(), "form validation failed");
            return SubmitOutcome::Invalid;
        }

        self.submitting = true;
        let result = match &self.mode {
            FormMode::Create => api.create_post(&self.draft.to_new_post()).await,
            FormMode::Edit { id, original } => {
                api.update_post(*id, &self.draft.patch_against(original))
                    .await
            }
        };
        self.submitting = false;

        match result {
            Ok(post) => SubmitOutcome::Saved(post),
            Err(err) => {
                let (verb, message) = match self.mode {
                    FormMode::Create => ("create", "Failed to create post. Please try again."),
                    FormMode::Edit { .. } => ("update", "Failed to update post. Please try again."),
                };
                tracing::error!(error = %err, "failed to {} post", verb);
                self.submit_error = Some(message.to_string());
                SubmitOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogdeck_client::InMemoryBackend;

    fn filled() -> PostForm {
        let mut form = PostForm::create();
        form.set_field(Field::Title, "Hello");
        form.set_field(Field::Content, "World");
        form
    }

    #[test]
    fn test_required_fields() {
        let errors = validate_draft(&PostDraft::default()).unwrap_err();
        assert_eq!(errors.get(Field::Title), Some("Title is required"));
        assert_eq!(errors.get(Field::Content), Some("Content is required"));
        assert_eq!(errors.get(Field::Summary), None);
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let draft = PostDraft {
            title: "   ".into(),
            content: "\n\t".into(),
            ..Default::default()
        };
        assert_eq!(validate_draft(&draft).unwrap_err().len(), 2);
    }

    #[test]
    fn test_length_limits() {
        let draft = PostDraft {
            title: "t".repeat(201),
            content: "c".repeat(10_001),
            summary: "s".repeat(501),
            ..Default::default()
        };
        let errors = validate_draft(&draft).unwrap_err();
        assert_eq!(
            errors.get(Field::Title),
            Some("Title must be less than 200 characters")
        );
        assert_eq!(
            errors.get(Field::Content),
            Some("Content must be less than 10000 characters")
        );
        assert_eq!(
            errors.get(Field::Summary),
            Some("Summary must be less than 500 characters")
        );
    }

    #[test]
    fn test_limits_are_inclusive() {
        let draft = PostDraft {
            title: "t".repeat(200),
            content: "c".repeat(10_000),
            summary: "s".repeat(500),
            ..Default::default()
        };
        assert!(validate_draft(&draft).is_ok());
    }

    #[test]
    fn test_patch_validation_only_checks_present_fields() {
        assert!(validate_patch(&PostPatch::default()).is_ok());

        let patch = PostPatch {
            title: Some(" ".into()),
            ..Default::default()
        };
        let errors = validate_patch(&patch).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.get(Field::Title).is_some());
    }

    #[test]
    fn test_steps_are_bounded() {
        let mut form = PostForm::create();
        form.prev_step();
        assert_eq!(form.step(), FormStep::BasicInfo);
        form.next_step();
        form.next_step();
        form.next_step();
        assert_eq!(form.step(), FormStep::Content);
        assert_eq!(form.step().number(), FormStep::COUNT);
    }

    #[test]
    fn test_editing_field_clears_its_error_only() {
        let mut form = PostForm::create();
        assert!(!form.validate());
        form.push_char(Field::Title, 'H');
        assert_eq!(form.errors().get(Field::Title), None);
        assert!(form.errors().get(Field::Content).is_some());
    }

    #[test]
    fn test_counter_reports_limit() {
        let form = filled();
        assert_eq!(form.counter(Field::Title), (5, Some(TITLE_MAX)));
        assert_eq!(form.counter(Field::Author), (0, None));
    }

    #[test]
    fn test_new_post_drops_blank_optionals() {
        let mut form = filled();
        form.set_field(Field::Author, "  ");
        form.set_field(Field::Tags, "rust, cli");
        let body = form.draft().to_new_post();
        assert_eq!(body.author, None);
        assert_eq!(body.summary, None);
        assert_eq!(body.tags.as_deref(), Some("rust, cli"));
    }

    #[test]
    fn test_edit_patch_contains_changes_and_published() {
        let mut post = Post::draft("Hello", "World");
        post.id = Some(PostId::new(4));
        post.summary = Some("old".into());
        post.published = true;

        let mut form = PostForm::edit(&post).unwrap();
        form.set_field(Field::Summary, "");
        form.set_field(Field::Content, "World!");

        let patch = form.draft().patch_against(&post);
        assert_eq!(patch.title, None);
        assert_eq!(patch.content.as_deref(), Some("World!"));
        assert_eq!(patch.summary.as_deref(), Some(""));
        assert_eq!(patch.published, Some(true));
    }

    #[test]
    fn test_edit_requires_persisted_post() {
        assert!(PostForm::edit(&Post::draft("a", "b")).is_none());
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_call_and_keeps_step() {
        let api = InMemoryBackend::new();
        let mut form = PostForm::create();
        form.next_step();
        form.next_step();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Invalid);
        assert!(api.calls().is_empty());
        assert_eq!(form.step(), FormStep::Content);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_failed_submit_sets_generic_error_and_reenables() {
        let api = InMemoryBackend::new();
        api.fail_next(500, "boom");
        let mut form = filled();

        assert_eq!(form.submit(&api).await, SubmitOutcome::Failed);
        assert_eq!(
            form.submit_error(),
            Some("Failed to create post. Please try again.")
        );
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());

        match form.submit(&api).await {
            SubmitOutcome::Saved(post) => assert!(post.is_persisted()),
            other => panic!("expected save, got {other:?}"),
        }
        assert_eq!(form.submit_error(), None);
    }
}
