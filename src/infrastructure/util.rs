use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates to ASCII, lowercases and joins words with `-`. Underscores
/// survive as word characters, so `Summer_Wear` becomes `summer_wear`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        input
            .split('_')
            .map(slugify)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }
}
