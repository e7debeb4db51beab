use super::Article;

/// Fixed sample set served when the upstream is unreachable or unconfigured.
/// The searched topic is interpolated into each title and description so the
/// frontend still renders something on-theme.
pub fn sample_articles(tema: &str) -> Vec<Article> {
    vec![
        Article {
            titulo: format!(
                "Últimas novidades em {}: Inovações revolucionárias chegam ao mercado",
                tema
            ),
            descricao: format!(
                "Descubra as principais tendências e inovações em {} que estão transformando o mercado brasileiro e mundial.",
                tema
            ),
            url: "https://example.com/noticia1".to_string(),
            fonte: "TechNews Brasil".to_string(),
            data_publicacao: "2025-09-01T10:30:00Z".to_string(),
            imagem: "https://via.placeholder.com/300x200?text=Tech+News".to_string(),
        },
        Article {
            titulo: format!("Análise: O futuro de {} no Brasil", tema),
            descricao: format!(
                "Especialistas analisam as perspectivas e desafios para o setor de {} nos próximos anos.",
                tema
            ),
            url: "https://example.com/noticia2".to_string(),
            fonte: "Jornal da Inovação".to_string(),
            data_publicacao: "2025-08-31T15:45:00Z".to_string(),
            imagem: "https://via.placeholder.com/300x200?text=Innovation".to_string(),
        },
        Article {
            titulo: format!("Empresas brasileiras lideram em {}", tema),
            descricao: format!(
                "Conheça as startups e empresas nacionais que estão se destacando no cenário de {}.",
                tema
            ),
            url: "https://example.com/noticia3".to_string(),
            fonte: "StartupBR".to_string(),
            data_publicacao: "2025-08-30T09:15:00Z".to_string(),
            imagem: "https://via.placeholder.com/300x200?text=Startup+BR".to_string(),
        },
        Article {
            titulo: format!("Investimentos em {} crescem 150% no país", tema),
            descricao: format!(
                "Relatório mostra crescimento significativo nos investimentos em {} durante o último trimestre.",
                tema
            ),
            url: "https://example.com/noticia4".to_string(),
            fonte: "Economia Digital".to_string(),
            data_publicacao: "2025-08-29T14:20:00Z".to_string(),
            imagem: "https://via.placeholder.com/300x200?text=Investment".to_string(),
        },
        Article {
            titulo: format!("Regulamentação de {}: Novas regras entram em vigor", tema),
            descricao: format!(
                "Governo anuncia novas diretrizes para regulamentar o setor de {} no Brasil.",
                tema
            ),
            url: "https://example.com/noticia5".to_string(),
            fonte: "Portal Gov".to_string(),
            data_publicacao: "2025-08-28T11:00:00Z".to_string(),
            imagem: "https://via.placeholder.com/300x200?text=Government".to_string(),
        },
    ]
}
