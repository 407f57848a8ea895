use serde::Serialize;

/// How many sources the references panel lists before summarising the rest.
pub const VISIBLE_SOURCES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KnowledgeSource {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
    pub size: Option<&'static str>,
    pub date: Option<&'static str>,
}

static SOURCES: [KnowledgeSource; 1] = [KnowledgeSource {
    id: 1,
    name: "Guía de Evaluación de Feedback.pdf",
    kind: "pdf",
    size: Some("2.4 MB"),
    date: Some("2024-01-10"),
}];

/// Reference documents shown in the knowledge panel.
pub fn knowledge_sources() -> &'static [KnowledgeSource] {
    &SOURCES
}
