// src/application/commands/items/create.rs
use super::ItemCommandService;
use crate::{
    application::{
        dto::ContentItemDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        content::{
            ItemTitle, NewContentItem,
            services::ordering::{next_order_key, sort_siblings},
            value_objects::ContentKind,
        },
        taxonomy::Taxonomy,
    },
};

pub struct CreateItemCommand {
    pub kind: ContentKind,
    pub title: String,
    pub category_name: String,
    pub hidden: bool,
}

impl CreateItemCommand {
    pub fn builder() -> CreateItemCommandBuilder {
        CreateItemCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateItemCommandBuilder {
    kind: Option<ContentKind>,
    title: Option<String>,
    category_name: Option<String>,
    hidden: bool,
}

impl CreateItemCommandBuilder {
    pub fn kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn category_name(mut self, category_name: impl Into<String>) -> Self {
        self.category_name = Some(category_name.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn build(self) -> Result<CreateItemCommand, &'static str> {
        Ok(CreateItemCommand {
            kind: self.kind.ok_or("kind is required")?,
            title: self.title.ok_or("title is required")?,
            category_name: self.category_name.ok_or("category is required")?,
            hidden: self.hidden,
        })
    }
}

impl ItemCommandService {
    pub async fn create_item(
        &self,
        taxonomy: &Taxonomy,
        command: CreateItemCommand,
    ) -> ApplicationResult<ContentItemDto> {
        let title = ItemTitle::new(command.title)?;
        let category = taxonomy.find_by_name(&command.category_name).ok_or_else(|| {
            ApplicationError::validation(format!(
                "unknown category '{}'",
                command.category_name
            ))
        })?;

        let slug = self
            .slug_service
            .generate_unique_slug(taxonomy, command.kind, category, title.as_str(), None, None)
            .await?;

        let mut siblings = self
            .read_store
            .list_by_category(command.kind, category.name())
            .await?;
        sort_siblings(&mut siblings);
        let order = next_order_key(&siblings);

        let now = self.clock.now();
        let new_item = NewContentItem {
            kind: command.kind,
            title,
            category_name: category.name().to_owned(),
            slug,
            order: Some(order),
            is_hidden: command.hidden,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_store.insert(new_item).await?;
        Ok(created.into())
    }
}
