use crate::color::ColorTag;
use crate::model::{ContentBlock, OverlayContent, OverlaySection, Page, Tab, TopicSection};

use super::slugs;

pub(super) fn page() -> Page {
    Page::new(slugs::CLOTHING_BRAND, "Clothing Brand")
        .with_tagline("From first sketch to first sold-out drop.")
        .with_tab(brand_building())
        .with_tab(production())
        .with_tab(launch())
}

fn brand_building() -> Tab {
    Tab::new("brand-building", "Brand Building")
        .with_icon("🏷️")
        .with_intro("A brand is a point of view people want to wear.")
        .with_topic(
            TopicSection::new("brand-identity", "Brand Identity", ColorTag::Purple)
                .with_icon("✨")
                .with_description("Name, logo, and the story behind the label.")
                .with_overlay(
                    OverlayContent::new("Brand Identity Guide")
                        .with_description("Decide who the brand is for before designing anything.")
                        .with_section(
                            OverlaySection::new("Positioning", ColorTag::Purple)
                                .with_block(ContentBlock::paragraph(
                                    "Describe the customer in one sentence: where they go, what \
                                     they listen to, and what they refuse to wear.",
                                ))
                                .with_block(ContentBlock::bullets([
                                    "Three brand values",
                                    "Two competitor brands and how you differ",
                                    "A one-line mission",
                                ])),
                        )
                        .with_section(
                            OverlaySection::new("Visual system", ColorTag::Blue)
                                .with_block(ContentBlock::steps([
                                    "Choose a name and check trademark availability",
                                    "Design a wordmark and a small icon",
                                    "Pick two typefaces and a four-color palette",
                                ]))
                                .with_resource("USPTO trademark search", "https://www.uspto.gov/trademarks/search")
                                .with_resource("Canva", "https://www.canva.com")
                                .with_checklist([
                                    "Name cleared",
                                    "Logo files exported",
                                    "Brand guide drafted",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("collection-planning", "Collection Planning", ColorTag::Yellow)
                .with_icon("🧵")
                .with_description("Start small: a capsule of four to six pieces.")
                .with_overlay(
                    OverlayContent::new("Collection Planning Guide").with_section(
                        OverlaySection::new("Capsule collection", ColorTag::Yellow)
                            .with_block(ContentBlock::bullets([
                                "Two hero pieces that carry the story",
                                "Two to four basics that pair with them",
                                "One accessory for a lower price point",
                            ]))
                            .with_block(ContentBlock::tip(
                                "Keep it tight",
                                "Fewer styles means deeper stock per style and lower minimums.",
                            )),
                    ),
                ),
        )
}

fn production() -> Tab {
    Tab::new("production", "Production")
        .with_icon("🏭")
        .with_intro("Turn designs into garments you are proud to ship.")
        .with_topic(
            TopicSection::new("sourcing", "Sourcing Manufacturers", ColorTag::Orange)
                .with_icon("🔍")
                .with_description("Find factories or print-on-demand partners that fit your volume.")
                .with_overlay(
                    OverlayContent::new("Sourcing Guide")
                        .with_section(
                            OverlaySection::new("Choose a model", ColorTag::Orange)
                                .with_block(ContentBlock::bullets([
                                    "Print on demand: no inventory, lower margin",
                                    "Blank plus decoration: moderate minimums",
                                    "Cut and sew: full control, highest minimums",
                                ]))
                                .with_resource("Printful", "https://www.printful.com")
                                .with_resource("Maker's Row", "https://makersrow.com"),
                        )
                        .with_section(
                            OverlaySection::new("Vet the partner", ColorTag::Red)
                                .with_block(ContentBlock::steps([
                                    "Request samples of similar garments",
                                    "Confirm minimum order quantities and lead times",
                                    "Ask for references from small brands",
                                ]))
                                .with_checklist([
                                    "Three quotes collected",
                                    "Samples received and wash-tested",
                                    "Production timeline agreed",
                                ]),
                        ),
                ),
        )
        .with_topic(
            TopicSection::new("tech-packs", "Tech Packs", ColorTag::Blue)
                .with_icon("📐")
                .with_description("The blueprint a factory builds from.")
                .with_overlay(
                    OverlayContent::new("Tech Pack Guide").with_section(
                        OverlaySection::new("What goes in", ColorTag::Blue)
                            .with_block(ContentBlock::bullets([
                                "Flat sketches, front and back",
                                "Measurements for every size",
                                "Fabric, trims, and colorways",
                                "Label and packaging placement",
                            ]))
                            .with_checklist(["Tech pack reviewed by the factory"]),
                    ),
                ),
        )
}

fn launch() -> Tab {
    Tab::new("launch", "Launch")
        .with_icon("🚀")
        .with_intro("Build anticipation, then release in limited drops.")
        .with_topic(
            TopicSection::new("storefront", "Storefront", ColorTag::Green)
                .with_icon("🛒")
                .with_description("An online store that photographs the clothes well.")
                .with_overlay(
                    OverlayContent::new("Storefront Guide").with_section(
                        OverlaySection::new("Setup", ColorTag::Green)
                            .with_block(ContentBlock::steps([
                                "Pick a store platform and a clean theme",
                                "Shoot products on-model and flat",
                                "Write size guides and a clear returns policy",
                            ]))
                            .with_resource("Shopify", "https://www.shopify.com")
                            .with_checklist([
                                "Payments tested end to end",
                                "Shipping rates configured",
                                "Size guide published",
                            ]),
                    ),
                ),
        )
        .with_topic(
            TopicSection::new("drop-strategy", "Drop Strategy", ColorTag::Red)
                .with_icon("⏳")
                .with_description("Scarcity and timing that sell out a first run.")
                .with_overlay(
                    OverlayContent::new("Drop Strategy Guide")
                        .with_description("Announce, tease, release, restock rarely.")
                        .with_section(
                            OverlaySection::new("Countdown", ColorTag::Red)
                                .with_block(ContentBlock::paragraph(
                                    "Open a waitlist two weeks out, tease one piece per day, and \
                                     give the waitlist a one-hour head start.",
                                ))
                                .with_block(ContentBlock::tip(
                                    "Limited means limited",
                                    "Restocking a sold-out piece immediately teaches customers \
                                     that urgency is fake.",
                                )),
                        ),
                ),
        )
}
