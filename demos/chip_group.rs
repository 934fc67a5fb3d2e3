use gpui::{
    App, AppContext, Application, Bounds, Context, FocusHandle, KeyBinding, Menu, SharedString,
    TitlebarOptions, Window, WindowBounds, WindowOptions, actions, div, point, prelude::*, px,
    size,
};

use gpui_chips::{
    ChipsAssets, assets,
    components::{
        ChipComponent, ChipGroup, ChipGroupType, ChipItem, Expand, SingleSelectChipGroup,
        StatefulChipGroup, StatefulSingleSelectChipGroup, next_single_selection,
    },
    theme::{ChipStyle, ThemeExt},
};

const CITIES: [&str; 12] = [
    "London", "Paris", "Rome", "Madrid", "Lisbon", "Berlin", "Vienna", "Prague", "Oslo",
    "Helsinki", "Dublin", "Athens",
];

struct Root {
    focus_handle: FocusHandle,

    selected_cities: Vec<bool>,
    cabin_class: Option<usize>,
    more_collapsed: bool,
}

actions!(window, [TabNext, TabPrev]);

impl Root {
    fn city_chips(&self, cx: &mut Context<Self>) -> Vec<ChipItem> {
        let entity = cx.entity();

        CITIES
            .iter()
            .zip(&self.selected_cities)
            .map(|(city, selected)| {
                let entity = entity.clone();

                ChipItem::new(*city, *city)
                    .selected(*selected)
                    .on_click(move |selected, position, _window, cx| {
                        let Some(index) = position.index() else {
                            return;
                        };

                        entity.update(cx, |view, cx| {
                            view.selected_cities[index] = selected;
                            cx.notify();
                        });
                    })
            })
            .collect()
    }
}

impl Render for Root {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        gpui_chips::init_for_window(window, cx);

        let theme = cx.get_theme();
        let text_size = theme.layout.text.default_font.sizes.body;
        let colors = theme.variants.active(cx).colors.clone();
        let city_chips = self.city_chips(cx);
        let entity = cx.entity();

        div()
            .tab_group()
            .track_focus(&self.focus_handle)
            .size_full()
            .text_size(text_size)
            .text_color(colors.text.primary)
            .bg(colors.background.primary)
            .flex()
            .flex_col()
            .gap(px(24.))
            .p(px(32.))
            .child("Rail, caller-managed selection")
            .child(
                ChipGroup::new("cities-rail", city_chips.clone())
                    .aria_label("Cities")
                    .sticky_chip(ChipItem::new("filters", "All filters").on_click(
                        |_selected, _position, _window, _cx| tracing::info!("filters opened"),
                    )),
            )
            .child("Wrap")
            .child(
                ChipGroup::new("cities-wrap", city_chips)
                    .group_type(ChipGroupType::Wrap)
                    .aria_label("Cities"),
            )
            .child("Stateful, on a dark surface")
            .child(
                div().p(px(12.)).bg(colors.background.contrast).child(
                    StatefulChipGroup::new(
                        "stateful",
                        [
                            ChipItem::new("direct", "Direct only").selected(true),
                            ChipItem::new("stops", "Stops").component(ChipComponent::Dropdown),
                            ChipItem::new("bags", "Cabin bag")
                                .component(ChipComponent::Dismissible),
                            ChipItem::new("hidden", "Hidden").hidden(true),
                        ],
                    )
                    .chip_style(ChipStyle::OnDark)
                    .aria_labelled_by("stateful-heading")
                    .sticky_chip(ChipItem::new("stateful-filters", "Filters").on_click(
                        |selected, position, _window, _cx| {
                            tracing::info!(selected, ?position, "pinned chip activated")
                        },
                    )),
                ),
            )
            .child("Single select")
            .child(
                SingleSelectChipGroup::new(
                    "cabin-class",
                    ["Economy", "Premium economy", "Business", "First"]
                        .into_iter()
                        .map(|class| ChipItem::new(class, class)),
                )
                .group_type(ChipGroupType::Wrap)
                .aria_label("Cabin class")
                .selected_index(self.cabin_class)
                .on_item_click(move |selected, index, _window, cx| {
                    entity.update(cx, |view, cx| {
                        view.cabin_class = next_single_selection(view.cabin_class, selected, index);
                        cx.notify();
                    });
                }),
            )
            .child(
                StatefulSingleSelectChipGroup::new(
                    "sort",
                    [
                        ChipItem::new("best", "Best").selected(true),
                        ChipItem::new("cheapest", "Cheapest"),
                        ChipItem::new("fastest", "Fastest"),
                    ],
                )
                .group_type(ChipGroupType::Wrap)
                .aria_label("Sort by")
                .on_item_click(|selected, index, _window, _cx| {
                    tracing::info!(selected, index, "sort changed")
                }),
            )
            .child(
                Expand::new(
                    "more",
                    SharedString::from(if self.more_collapsed {
                        "Show more"
                    } else {
                        "Show less"
                    }),
                )
                .collapsed(self.more_collapsed)
                .on_show(|_window, _cx| tracing::info!("showing more"))
                .on_hide(|_window, _cx| tracing::info!("hiding"))
                .on_toggle(cx.listener(|view: &mut Root, collapsed, _window, cx| {
                    view.more_collapsed = *collapsed;
                    cx.notify();
                })),
            )
            .when(!self.more_collapsed, |this| {
                this.child("Extra content revealed by the expand button.")
            })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![ChipsAssets])
        .run(|cx: &mut App| {
            gpui_chips::init(cx);

            cx.set_menus(vec![Menu {
                name: "Chip groups".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(1100.), px(820.)), cx);

            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    cx.new(|cx| Root {
                        focus_handle: cx.focus_handle(),
                        selected_cities: vec![false; CITIES.len()],
                        cabin_class: None,
                        more_collapsed: true,
                    })
                },
            )
            .unwrap();

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
