//! User-facing messages in English, Italian, French and Spanish.

/// Message catalogue for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    pub lang: &'static str,
    results_for: &'static str,
    pub no_results: &'static str,
    pub error_empty_query: &'static str,
    pub error_api_key: &'static str,
    pub error_cse_id: &'static str,
    pub search_start: &'static str,
    pub search_success: &'static str,
    pub search_no_items: &'static str,
    pub separator: &'static str,
}

impl Messages {
    /// Catalogue for `lang` (e.g. "it", "IT", "fr"), falling back to English.
    pub fn for_language(lang: &str) -> &'static Messages {
        let lang = lang.trim().to_lowercase();
        CATALOGUES
            .iter()
            .find(|m| m.lang == lang)
            .unwrap_or(&CATALOGUES[0])
    }

    /// Markdown heading introducing the results for `query`.
    pub fn results_for(&self, query: &str) -> String {
        self.results_for.replace("{query}", query)
    }
}

static CATALOGUES: [Messages; 4] = [
    Messages {
        lang: "en",
        results_for: "## Search results for: *{query}*\n",
        no_results: "No results found for the query.",
        error_empty_query: "Search query cannot be empty.",
        error_api_key: "Google API key is not configured or invalid.",
        error_cse_id: "Custom Search Engine ID is not configured.",
        search_start: "Starting search on Google...",
        search_success: "Search completed successfully.",
        search_no_items: "No results found.",
        separator: "---\n",
    },
    Messages {
        lang: "it",
        results_for: "## Risultati ricerca per: *{query}*\n",
        no_results: "Nessun risultato trovato per la query.",
        error_empty_query: "La query di ricerca non può essere vuota.",
        error_api_key: "La chiave API Google non è configurata o non valida.",
        error_cse_id: "L'ID Custom Search Engine non è configurato.",
        search_start: "Avvio ricerca su Google...",
        search_success: "Ricerca completata con successo.",
        search_no_items: "Nessun risultato trovato.",
        separator: "---\n",
    },
    Messages {
        lang: "fr",
        results_for: "## Résultats de recherche pour : *{query}*\n",
        no_results: "Aucun résultat trouvé pour la requête.",
        error_empty_query: "La requête de recherche ne peut pas être vide.",
        error_api_key: "La clé API Google n'est pas configurée ou invalide.",
        error_cse_id: "L'ID du moteur de recherche personnalisé n'est pas configuré.",
        search_start: "Démarrage de la recherche sur Google...",
        search_success: "Recherche terminée avec succès.",
        search_no_items: "Aucun résultat trouvé.",
        separator: "---\n",
    },
    Messages {
        lang: "es",
        results_for: "## Resultados de búsqueda para: *{query}*\n",
        no_results: "No se encontraron resultados para la consulta.",
        error_empty_query: "La consulta de búsqueda no puede estar vacía.",
        error_api_key: "La clave API de Google no está configurada o es inválida.",
        error_cse_id: "El ID del motor de búsqueda personalizado no está configurado.",
        search_start: "Iniciando búsqueda en Google...",
        search_success: "Búsqueda completada con éxito.",
        search_no_items: "No se encontraron resultados.",
        separator: "---\n",
    },
];
