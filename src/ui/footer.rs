// SPDX-License-Identifier: MPL-2.0
//! Site footer: three columns of links and a caption line.

use crate::application::port::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Where a footer link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// A page of this application.
    Internal(Route),
    /// A web page, opened outside the application.
    External(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label_key: &'static str,
    pub target: LinkTarget,
}

/// A headed column. Each group is rendered as its own visually separated
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub heading_key: &'static str,
    pub groups: &'static [&'static [FooterLink]],
}

const fn external(label_key: &'static str, url: &'static str) -> FooterLink {
    FooterLink {
        label_key,
        target: LinkTarget::External(url),
    }
}

const fn internal(label_key: &'static str, route: Route) -> FooterLink {
    FooterLink {
        label_key,
        target: LinkTarget::Internal(route),
    }
}

const FINANCIAL_LINKS: &[FooterLink] = &[
    external(
        "footer-link-financial-aid",
        "https://www.utdallas.edu/finaid/",
    ),
    external("footer-link-bursar", "https://bursar.utdallas.edu/"),
];

const ADVISING_LINKS: &[FooterLink] = &[
    external(
        "footer-link-ecs-advising",
        "https://engineering.utdallas.edu/engineering/academics/undergraduate-majors/undergrad-advising/",
    ),
    external("footer-link-bbs-advising", "https://bbs.utdallas.edu/advising/"),
    external("footer-link-jsom-advising", "https://jindal.utdallas.edu/advising/"),
    external("footer-link-nsm-advising", "https://nsm.utdallas.edu/advising/"),
    external("footer-link-is-advising", "https://is.utdallas.edu/contact/advisors/"),
    external(
        "footer-link-atec-advising",
        "https://atec.utdallas.edu/people/#_people-advisors",
    ),
];

const VETERAN_LINKS: &[FooterLink] = &[external(
    "footer-link-veteran-center",
    "https://www.utdallas.edu/veterans/",
)];

const PLANNING_LINKS: &[FooterLink] = &[
    internal("footer-link-landing", Route::Landing),
    internal("footer-link-app-home", Route::AppHome),
    internal("footer-link-terms", Route::Terms),
    internal("footer-link-privacy", Route::Privacy),
    internal("footer-link-support", Route::Support),
];

const ACM_LINKS: &[FooterLink] = &[
    external("footer-link-acm-projects", "https://github.com/acmutd"),
    external(
        "footer-link-repository",
        "https://github.com/acmutd/comet-planning",
    ),
    external(
        "footer-link-data-service",
        "https://github.com/acmutd/comet-data-service",
    ),
    external("footer-link-acm-website", "https://acmutd.co"),
    external("footer-link-apply", "https://apply.acmutd.co/"),
    external(
        "footer-link-contribute",
        "https://github.com/acmutd/comet-planning/blob/dev/CONTRIBUTORS.md",
    ),
];

/// Footer columns in display order.
pub const SECTIONS: [FooterSection; 3] = [
    FooterSection {
        heading_key: "footer-section-academic",
        groups: &[FINANCIAL_LINKS, ADVISING_LINKS, VETERAN_LINKS],
    },
    FooterSection {
        heading_key: "footer-section-info",
        groups: &[PLANNING_LINKS],
    },
    FooterSection {
        heading_key: "footer-section-acm",
        groups: &[ACM_LINKS],
    },
];

/// Every footer link, in display order.
pub fn links() -> impl Iterator<Item = &'static FooterLink> {
    SECTIONS
        .iter()
        .flat_map(|section| section.groups.iter())
        .flat_map(|group| group.iter())
}

#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(LinkTarget),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(Route),
    OpenExternal(&'static str),
}

pub fn update(message: Message) -> Event {
    match message {
        Message::LinkPressed(LinkTarget::Internal(route)) => Event::Navigate(route),
        Message::LinkPressed(LinkTarget::External(url)) => Event::OpenExternal(url),
    }
}

/// Render the footer.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let columns = SECTIONS.iter().fold(
        Row::new().spacing(spacing::MD).width(Length::Fill),
        |row, section| row.push(build_section(i18n, section)),
    );

    let body = Container::new(columns)
        .max_width(sizing::FOOTER_MAX_WIDTH)
        .padding(spacing::MD);

    let body = Container::new(body)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::footer);

    let caption = Container::new(Text::new(i18n.tr("footer-caption")).size(typography::CAPTION))
        .width(Length::Fill)
        .padding(spacing::MD)
        .align_x(Horizontal::Center)
        .style(styles::container::footer_caption);

    Column::new()
        .width(Length::Fill)
        .push(body)
        .push(caption)
        .into()
}

fn build_section<'a>(i18n: &I18n, section: &FooterSection) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr(section.heading_key)).size(typography::TITLE_SM);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::FillPortion(1))
        .push(heading);

    for group in section.groups {
        let list = group.iter().fold(Column::new(), |list, link| {
            list.push(
                button(Text::new(i18n.tr(link.label_key)).size(typography::BODY))
                    .on_press(Message::LinkPressed(link.target))
                    .padding([spacing::XXS, 0.0])
                    .style(styles::button::footer_link),
            )
        });
        column = column.push(list);
    }

    column.into()
}
