//! Typed extraction queries over a result document.
//!
//! All item accessors work on an `Item` subtree (`&Element`); the same
//! methods on the document root cover the whole response. Multi-valued
//! fields come back in document order, untransformed.

use crate::aws::document::{Element, ResultDocument};
use std::collections::{BTreeSet, HashMap};

/// Image sizes offered by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    Small,
    Medium,
    Large,
}

impl ImageSize {
    /// Tag name of the corresponding image container element.
    pub fn element_name(&self) -> &'static str {
        match self {
            ImageSize::Small => "SmallImage",
            ImageSize::Medium => "MediumImage",
            ImageSize::Large => "LargeImage",
        }
    }
}

/// How desired attribute values are compared by [`ResultDocument::find_items`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatchMode {
    /// Substring containment: `"Blade Runner"` matches
    /// `"Blade Runner: The Final Cut"`.
    #[default]
    Loose,
    /// String equality.
    Exact,
}

impl MatchMode {
    fn matches(&self, actual: &str, desired: &str) -> bool {
        match self {
            MatchMode::Loose => actual.contains(desired),
            MatchMode::Exact => actual == desired,
        }
    }
}

impl Element {
    /// Text of every `tag` element inside each `ItemAttributes` block
    /// under this scope, in document order. Empty when none exist.
    ///
    /// This is the primitive behind all the attribute accessors.
    pub fn attribute_values(&self, tag: &str) -> Vec<String> {
        let mut values = Vec::new();
        for attributes in self.descendants("ItemAttributes") {
            for element in attributes.descendants(tag) {
                if let Some(text) = element.text() {
                    values.push(text.to_string());
                }
            }
        }
        values
    }

    fn first_attribute_value(&self, tag: &str) -> Option<String> {
        self.attribute_values(tag).into_iter().next()
    }

    /// Item title.
    pub fn title(&self) -> Option<String> {
        self.first_attribute_value("Title")
    }

    /// Publication date, mostly for books.
    pub fn publication_date(&self) -> Option<String> {
        self.first_attribute_value("PublicationDate")
    }

    /// Page count for books.
    pub fn page_count(&self) -> Option<String> {
        self.first_attribute_value("NumberOfPages")
    }

    /// Binding, e.g. `Paperback`, `Blu-ray`, `Amazon Instant Video`.
    pub fn binding(&self) -> Option<String> {
        self.first_attribute_value("Binding")
    }

    /// Product group, e.g. `Book` or `Movie`.
    pub fn product_group(&self) -> Option<String> {
        self.first_attribute_value("ProductGroup")
    }

    /// Running time for movies. The units ride on the element's
    /// `Units` attribute, usually minutes.
    pub fn running_time(&self) -> Option<String> {
        self.first_attribute_value("RunningTime")
    }

    /// Release date: the theatrical release date when present,
    /// otherwise the general release date.
    pub fn release_date(&self) -> Option<String> {
        self.first_attribute_value("TheatricalReleaseDate")
            .or_else(|| self.first_attribute_value("ReleaseDate"))
    }

    /// MPAA audience rating, e.g. `PG-13`.
    pub fn mpaa_rating(&self) -> Option<String> {
        self.first_attribute_value("AudienceRating")
    }

    /// Media format.
    pub fn format(&self) -> Option<String> {
        self.first_attribute_value("Format")
    }

    /// Creator credit (producer, writer, ...).
    pub fn creator(&self) -> Option<String> {
        self.first_attribute_value("Creator")
    }

    /// All authors, in document order.
    pub fn authors(&self) -> Vec<String> {
        self.attribute_values("Author")
    }

    /// All actors, in document order.
    pub fn actors(&self) -> Vec<String> {
        self.attribute_values("Actor")
    }

    /// All directors, in document order.
    pub fn directors(&self) -> Vec<String> {
        self.attribute_values("Director")
    }

    /// All genres, in document order.
    pub fn genres(&self) -> Vec<String> {
        self.attribute_values("Genre")
    }

    /// URL of the image in the requested size, when present.
    pub fn image_url(&self, size: ImageSize) -> Option<String> {
        self.first_descendant(size.element_name())
            .and_then(|image| image.first_descendant("URL"))
            .and_then(|url| url.text().map(str::to_string))
    }

    /// URL of the item's product page.
    pub fn detail_page_url(&self) -> Option<String> {
        self.first_descendant("DetailPageURL").and_then(|url| url.text().map(str::to_string))
    }

    /// Catalog identifier of the item.
    pub fn asin(&self) -> Option<String> {
        self.first_descendant("ASIN").and_then(|asin| asin.text().map(str::to_string))
    }

    /// Distinct binding strings below this scope.
    pub fn binding_set(&self) -> BTreeSet<String> {
        self.descendants("Binding").iter().filter_map(|b| b.text()).map(str::to_string).collect()
    }

    /// Content of the editorial review whose `Source` label matches,
    /// or the empty string when there is no such review.
    pub fn editorial_content(&self, source: &str) -> String {
        for review in self.descendants("EditorialReview") {
            let from_source =
                review.descendants("Source").iter().any(|s| s.text() == Some(source));
            if from_source {
                if let Some(content) =
                    review.first_descendant("Content").and_then(|c| c.text())
                {
                    return content.to_string();
                }
            }
        }
        String::new()
    }
}

impl ResultDocument {
    /// Every `Item` element in the response, in document order.
    pub fn items(&self) -> Vec<&Element> {
        self.root().descendants("Item")
    }

    /// The first `Item` element, if any.
    pub fn first_item(&self) -> Option<&Element> {
        self.root().first_descendant("Item")
    }

    /// ASINs of every item in the response.
    pub fn asins(&self) -> Vec<String> {
        self.root()
            .descendants("ASIN")
            .iter()
            .filter_map(|asin| asin.text())
            .map(str::to_string)
            .collect()
    }

    /// `DetailPageURL` of the first item in the response.
    pub fn detail_page_url(&self) -> Option<String> {
        self.root().detail_page_url()
    }

    /// Distinct bindings across the supplied items, or across the whole
    /// response when `items` is `None`.
    pub fn binding_set(&self, items: Option<&[&Element]>) -> BTreeSet<String> {
        match items {
            Some(items) => items.iter().flat_map(|item| item.binding_set()).collect(),
            None => self.root().binding_set(),
        }
    }

    /// Items whose `ItemAttributes` satisfy every predicate.
    ///
    /// Per key, any same-named child may supply the match; an item
    /// qualifies only when every key is satisfied. An empty predicate
    /// map returns all items.
    pub fn find_items(
        &self,
        predicates: &HashMap<String, String>,
        mode: MatchMode,
    ) -> Vec<&Element> {
        self.items()
            .into_iter()
            .filter(|item| {
                predicates.iter().all(|(tag, desired)| {
                    item.attribute_values(tag).iter().any(|actual| mode.matches(actual, desired))
                })
            })
            .collect()
    }

    /// Error codes reported inside the response, `None` when the
    /// response carries no `Errors` block. A well-formed response can
    /// still signal failure, so check this after every request.
    pub fn error_codes(&self) -> Option<Vec<String>> {
        let codes: Vec<String> = self
            .root()
            .descendants("Errors")
            .iter()
            .flat_map(|errors| errors.descendants("Error"))
            .filter_map(|error| error.first_descendant("Code"))
            .filter_map(|code| code.text())
            .map(str::to_string)
            .collect();

        if codes.is_empty() {
            None
        } else {
            Some(codes)
        }
    }
}
