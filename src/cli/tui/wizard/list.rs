//! Cursor-addressed single choice list used by the selection steps

use ratatui::text::{Line, Span};

use super::theme::Theme;

/// An option that can be shown in a [`SelectableList`]
pub trait Choice: Copy {
    fn label(&self) -> &'static str;
}

/// Fixed, non-empty option set with a clamped cursor
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableList<T> {
    title: String,
    options: Vec<T>,
    cursor: usize,
}

impl<T: Choice> SelectableList<T> {
    /// The first option is taken separately so an empty list cannot be built
    pub fn new(title: impl Into<String>, first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut options = vec![first];
        options.extend(rest);
        Self {
            title: title.into(),
            options,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < self.options.len() {
            self.cursor += 1;
        }
    }

    pub fn selected(&self) -> T {
        self.options[self.cursor]
    }

    /// Title line followed by one numbered line per option
    pub fn render(&self, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(format!("  {}  ", self.title), theme.title)),
            Line::from(""),
        ];

        for (index, option) in self.options.iter().enumerate() {
            let entry = format!("{}. {}", index + 1, option.label());
            let line = if index == self.cursor {
                Line::from(Span::styled(
                    format!("{}{}", theme.cursor_marker, entry),
                    theme.selected,
                ))
            } else {
                Line::from(Span::styled(
                    format!("{}{}", " ".repeat(theme.cursor_marker.len()), entry),
                    theme.item,
                ))
            };
            lines.push(line);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Fruit {
        Apple,
        Pear,
        Plum,
    }

    impl Choice for Fruit {
        fn label(&self) -> &'static str {
            match self {
                Fruit::Apple => "Apple",
                Fruit::Pear => "Pear",
                Fruit::Plum => "Plum",
            }
        }
    }

    fn fruits() -> SelectableList<Fruit> {
        SelectableList::new("Pick a fruit", Fruit::Apple, [Fruit::Pear, Fruit::Plum])
    }

    #[test]
    fn test_starts_on_first_option() {
        let list = fruits();
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.selected(), Fruit::Apple);
    }

    #[test]
    fn test_move_up_at_top_is_noop() {
        let mut list = fruits();
        list.move_up();
        assert_eq!(list.cursor(), 0);
    }

    #[test]
    fn test_move_down_clamps_at_last() {
        let mut list = fruits();
        for _ in 0..10 {
            list.move_down();
        }
        assert_eq!(list.cursor(), 2);
        assert_eq!(list.selected(), Fruit::Plum);
        list.move_up();
        assert_eq!(list.selected(), Fruit::Pear);
    }

    #[test]
    fn test_single_option_list() {
        let mut list = SelectableList::new("Only", Fruit::Pear, Vec::new());
        list.move_down();
        list.move_up();
        assert_eq!(list.selected(), Fruit::Pear);
    }

    #[test]
    fn test_render_marks_cursor() {
        let mut list = fruits();
        list.move_down();
        let lines: Vec<String> = list
            .render(&Theme::plain())
            .iter()
            .map(|line| line.to_string())
            .collect();

        assert_eq!(lines[0], "  Pick a fruit  ");
        assert_eq!(lines[2], "   1. Apple");
        assert_eq!(lines[3], ">> 2. Pear");
        assert_eq!(lines[4], "   3. Plum");
    }
}
