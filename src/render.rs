use crate::books::types::Volume;

const MISSING: &str = "N/A";

/// Format the displayed result set as a sequence of cards.
pub fn format_results(volumes: &[Volume]) -> String {
    if volumes.is_empty() {
        return "No results found.\n".to_string();
    }
    let mut out = String::new();
    for volume in volumes {
        format_card(volume, &mut out);
    }
    out
}

fn format_card(volume: &Volume, out: &mut String) {
    let info = &volume.volume_info;

    let title = info.title.as_deref().unwrap_or(MISSING);
    out.push_str(&format!("## {title}\n\n"));

    let authors = match info.authors.as_deref() {
        Some(authors) if !authors.is_empty() => authors.join(", "),
        _ => MISSING.to_string(),
    };
    out.push_str(&format!("Author(s): {authors}\n"));

    let isbns = info
        .industry_identifiers
        .as_deref()
        .filter(|ids| !ids.is_empty())
        .map(|ids| {
            ids.iter()
                .map(|id| id.identifier.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| MISSING.to_string());
    out.push_str(&format!("ISBN(s): {isbns}\n"));

    let page_count = info
        .page_count
        .filter(|&count| count != 0)
        .map(|count| count.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    out.push_str(&format!("Page Count: {page_count}\n"));

    let date = info.published_date.as_deref().unwrap_or(MISSING);
    out.push_str(&format!("Publication Date: {date}\n"));

    // A missing publisher gets its own marker so it reads differently from
    // the plain N/A fallbacks.
    match info.publisher.as_deref().filter(|p| !p.is_empty()) {
        Some(publisher) => out.push_str(&format!("Publisher(s): {publisher}\n")),
        None => out.push_str("Publisher(s): No publisher information found.\n"),
    }

    if let Some(cover) = info.image_links.as_ref().and_then(|l| l.thumbnail.as_deref()) {
        out.push_str(&format!("Cover: {cover}\n"));
    }
    if let Some(link) = info.info_link.as_deref() {
        out.push_str(&format!("View on Google Books: {link}\n"));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::types::{ImageLinks, IndustryIdentifier, VolumeInfo};

    fn full_volume() -> Volume {
        Volume {
            id: Some("abc".into()),
            volume_info: VolumeInfo {
                title: Some("Dune".into()),
                subtitle: None,
                authors: Some(vec!["Frank Herbert".into()]),
                publisher: Some("Ace".into()),
                published_date: Some("1990-09-01".into()),
                page_count: Some(704),
                industry_identifiers: Some(vec![
                    IndustryIdentifier {
                        kind: Some("ISBN_10".into()),
                        identifier: "0441172717".into(),
                    },
                    IndustryIdentifier {
                        kind: Some("ISBN_13".into()),
                        identifier: "9780441172719".into(),
                    },
                ]),
                image_links: Some(ImageLinks {
                    small_thumbnail: None,
                    thumbnail: Some("https://example.com/dune.jpg".into()),
                }),
                info_link: Some("https://books.google.com/books?id=abc".into()),
                language: Some("en".into()),
            },
        }
    }

    fn bare_volume() -> Volume {
        Volume {
            id: None,
            volume_info: VolumeInfo::default(),
        }
    }

    #[test]
    fn full_card_renders_every_line() {
        let out = format_results(&[full_volume()]);
        assert!(out.contains("## Dune"));
        assert!(out.contains("Author(s): Frank Herbert"));
        assert!(out.contains("ISBN(s): 0441172717, 9780441172719"));
        assert!(out.contains("Page Count: 704"));
        assert!(out.contains("Publication Date: 1990-09-01"));
        assert!(out.contains("Publisher(s): Ace"));
        assert!(out.contains("Cover: https://example.com/dune.jpg"));
        assert!(out.contains("View on Google Books: https://books.google.com/books?id=abc"));
    }

    #[test]
    fn bare_card_uses_fallbacks() {
        let out = format_results(&[bare_volume()]);
        assert!(out.contains("## N/A"));
        assert!(out.contains("Author(s): N/A"));
        assert!(out.contains("ISBN(s): N/A"));
        assert!(out.contains("Page Count: N/A"));
        assert!(out.contains("Publication Date: N/A"));
    }

    #[test]
    fn missing_publisher_gets_distinct_marker() {
        let out = format_results(&[bare_volume()]);
        assert!(out.contains("Publisher(s): No publisher information found."));
        assert!(!out.contains("Publisher(s): N/A"));
    }

    #[test]
    fn missing_cover_and_link_lines_are_omitted() {
        let out = format_results(&[bare_volume()]);
        assert!(!out.contains("Cover:"));
        assert!(!out.contains("View on Google Books:"));
    }

    #[test]
    fn empty_set_says_no_results() {
        assert_eq!(format_results(&[]), "No results found.\n");
    }

    #[test]
    fn multiple_volumes_render_in_order() {
        let mut second = full_volume();
        second.volume_info.title = Some("Dune Messiah".into());
        let out = format_results(&[full_volume(), second]);
        let first_pos = out.find("## Dune\n").unwrap();
        let second_pos = out.find("## Dune Messiah").unwrap();
        assert!(first_pos < second_pos);
    }
}
