use crate::args::PostFieldArgs;
use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, anyhow, bail};
use blogdeck_client::PostsApi;
use blogdeck_engine::{Field, PostForm, SubmitOutcome};
use tokio::runtime::Runtime;

/// Flag values keyed by the form field they fill
pub(crate) fn provided_fields(fields: &PostFieldArgs) -> Vec<(Field, &str)> {
    [
        (Field::Title, &fields.title),
        (Field::Author, &fields.author),
        (Field::Summary, &fields.summary),
        (Field::Tags, &fields.tags),
        (Field::Content, &fields.content),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    .collect()
}

/// Runs the same validation as the interactive form; invalid input never
/// reaches the backend.
pub fn handle<A: PostsApi>(
    ctx: &HandlerContext,
    rt: &Runtime,
    api: &A,
    fields: &PostFieldArgs,
    publish: bool,
) -> Result<()> {
    let mut form = PostForm::create();
    for (field, value) in provided_fields(fields) {
        form.set_field(field, value);
    }
    form.set_published(publish);

    match rt.block_on(form.submit(api)) {
        SubmitOutcome::Saved(post) => {
            let id = post
                .id
                .ok_or_else(|| anyhow!("Backend returned the new post without an id"))?;
            ctx.render(presenters::present_post_created(id, &post))
        }
        SubmitOutcome::Invalid => {
            ctx.render(presenters::present_validation_failure(form.errors()))?;
            bail!("Validation failed ({} field(s))", form.errors().len())
        }
        SubmitOutcome::Failed => Err(anyhow!(
            "{}",
            form.submit_error()
                .unwrap_or("Failed to create post. Please try again.")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provided_fields_skips_missing_flags() {
        let args = PostFieldArgs {
            title: Some("Hello".into()),
            tags: Some("a,b".into()),
            ..Default::default()
        };
        assert_eq!(
            provided_fields(&args),
            vec![(Field::Title, "Hello"), (Field::Tags, "a,b")]
        );
    }
}
