//! Banner row shown above the table body while rows are selected.

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Column count above which the banner splits into sticky segments.
pub const SEGMENT_THRESHOLD: usize = 4;
const EDGE_COLSPAN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerLayout {
    /// One cell across the whole row, selection column included.
    Single { colspan: usize },
    Segmented { left: usize, middle: usize, right: usize },
}

impl BannerLayout {
    /// `columns` counts data columns plus the operations column, if any.
    pub fn for_columns(columns: usize) -> Self {
        if columns <= SEGMENT_THRESHOLD {
            BannerLayout::Single {
                colspan: columns + 1,
            }
        } else {
            BannerLayout::Segmented {
                left: EDGE_COLSPAN,
                middle: columns - 5,
                right: EDGE_COLSPAN,
            }
        }
    }
}

pub fn banner_columns(data_columns: usize, has_operations: bool) -> usize {
    data_columns + usize::from(has_operations)
}

/// Buttons on the right of the banner, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAction {
    BatchDelete,
    Export,
}

impl BannerAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::BatchDelete => " Batch delete",
            Self::Export => " Export",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::BatchDelete => "delete",
            Self::Export => "download",
        }
    }
}

/// Pairs each wired handler with its button; unwired actions are not shown.
pub fn banner_actions<C>(
    on_batch_delete: Option<C>,
    on_export: Option<C>,
) -> Vec<(BannerAction, C)> {
    [
        (BannerAction::BatchDelete, on_batch_delete),
        (BannerAction::Export, on_export),
    ]
    .into_iter()
    .filter_map(|(action, handler)| handler.map(|h| (action, h)))
    .collect()
}

#[component]
pub fn BatchBanner(
    #[prop(into)] selected: Signal<usize>,
    columns: usize,
    on_clear: Callback<()>,
    #[prop(optional_no_strip)] on_batch_delete: Option<Callback<()>>,
    #[prop(optional_no_strip)] on_export: Option<Callback<()>>,
) -> impl IntoView {
    let chosen = move || {
        view! {
            <span class="batch-banner__count">"Chosen: " {move || selected.get()}</span>
            <Button size=ButtonSize::Small on_click=move |_| on_clear.run(())>
                "Uncheck"
            </Button>
        }
    };
    let actions = move || {
        banner_actions(on_batch_delete, on_export)
            .into_iter()
            .map(|(action, cb)| {
                view! {
                    <Button size=ButtonSize::Small on_click=move |_| cb.run(())>
                        {icon(action.icon())}
                        {action.label()}
                    </Button>
                }
            })
            .collect_view()
    };

    view! {
        <Show when=move || { selected.get() > 0 }>
            <tr class="batch-banner">
                {match BannerLayout::for_columns(columns) {
                    BannerLayout::Single { colspan } => {
                        view! {
                            <td colspan=colspan>
                                <div class="batch-banner__inline">{chosen()} {actions()}</div>
                            </td>
                        }
                            .into_any()
                    }
                    BannerLayout::Segmented { left, middle, right } => {
                        view! {
                            <td colspan=left class="batch-banner__sticky-left">
                                {chosen()}
                            </td>
                            <td colspan=middle></td>
                            <td colspan=right class="batch-banner__sticky-right">
                                {actions()}
                            </td>
                        }
                            .into_any()
                    }
                }}
            </tr>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_tables_get_one_cell() {
        assert_eq!(banner_columns(3, true), 4);
        assert_eq!(BannerLayout::for_columns(4), BannerLayout::Single { colspan: 5 });
        assert_eq!(BannerLayout::for_columns(1), BannerLayout::Single { colspan: 2 });
    }

    #[test]
    fn test_wide_tables_are_segmented() {
        let columns = banner_columns(8, true);
        assert_eq!(
            BannerLayout::for_columns(columns),
            BannerLayout::Segmented { left: 3, middle: 4, right: 3 }
        );
        // the selection column is absorbed by the left segment
        match BannerLayout::for_columns(columns) {
            BannerLayout::Segmented { left, middle, right } => {
                assert_eq!(left + middle + right, columns + 1)
            }
            other => panic!("unexpected layout {:?}", other),
        }
    }

    #[test]
    fn test_banner_shows_only_wired_actions() {
        assert_eq!(
            banner_actions(Some(1), Some(2)),
            vec![(BannerAction::BatchDelete, 1), (BannerAction::Export, 2)]
        );
        assert_eq!(banner_actions(None, Some(2)), vec![(BannerAction::Export, 2)]);
        assert!(banner_actions::<u8>(None, None).is_empty());
        assert_eq!(BannerAction::Export.icon(), "download");
    }

    #[test]
    fn test_five_columns_has_empty_middle() {
        assert_eq!(
            BannerLayout::for_columns(5),
            BannerLayout::Segmented { left: 3, middle: 0, right: 3 }
        );
    }
}
