use repokit::prelude::*;

/// The record type the integration suites revolve around.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: i64,
    pub title: String,
    pub text: Option<String>,
}

impl Record for Article {
    const MODEL: &'static str = "Article";

    fn attribute(&self, name: &str) -> Option<AttributeValue> {
        match name {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "text" => Some(self.text.clone().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub title: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateArticle {
    pub title: String,
    pub text: Option<String>,
}

#[derive(Debug, Default)]
pub struct ArticleAdapter {
    last_id: i64,
}

impl ArticleAdapter {
    /// Adapter whose next generated id is `last_id + 1`, for seeded repos.
    #[allow(dead_code)]
    pub fn starting_after(last_id: i64) -> Self {
        Self { last_id }
    }
}

impl MemoryAdapter for ArticleAdapter {
    type Id = i64;
    type Entity = Article;
    type Create = CreateArticle;
    type Update = UpdateArticle;

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn build_entity(&self, input: CreateArticle, id: i64) -> Article {
        Article {
            id,
            title: input.title,
            text: input.text,
        }
    }

    fn apply_update(&self, entity: &mut Article, input: UpdateArticle) {
        entity.title = input.title;
        entity.text = input.text;
    }

    fn id_specification(&self, id: &i64) -> Specification {
        Specification::eq("id", *id)
    }
}

#[allow(dead_code)]
pub fn create_article(title: impl Into<String>, text: Option<&str>) -> CreateArticle {
    CreateArticle {
        title: title.into(),
        text: text.map(str::to_string),
    }
}

/// The nine creation inputs behind [`article_catalog`], in insertion order.
#[allow(dead_code)]
pub fn catalog_inputs() -> Vec<CreateArticle> {
    let mut inputs = Vec::new();
    for group in ["First Topic", "Second Topic", "Third Theme"] {
        for i in 1..=3 {
            inputs.push(CreateArticle {
                title: format!("{group} {i}"),
                text: Some(format!("Text {i}")),
            });
        }
    }
    inputs
}

/// Nine articles in three titled groups, ids 1 through 9 in insertion order.
#[allow(dead_code)]
pub fn article_catalog() -> MemoryRepository<ArticleAdapter> {
    let mut repo = MemoryRepository::new(ArticleAdapter::default());
    for input in catalog_inputs() {
        repo.create(input).unwrap();
    }
    repo
}

#[allow(dead_code)]
pub fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|article| article.title.as_str()).collect()
}

#[allow(dead_code)]
pub fn ids(articles: &[Article]) -> Vec<i64> {
    articles.iter().map(|article| article.id).collect()
}
