//! Static site content served to the front end.

use crate::entities::content::{
    FaqItem, Inclusion, Package, ProcessIcon, ProcessStep, Project, ProjectCategory,
    ServicesCatalog, SiteInfo, SocialLink, TierColor,
};

pub static SITE: SiteInfo = SiteInfo {
    name: "LEDream",
    tagline: "Where modern art & life become one",
    description: "We transform any space into a living art masterpiece through cutting-edge LED art, immersive design & psychedelic fantasy.",
    founded: "Late 2024",
    phone: "651-210-7253",
    email: "portal@ledream.art",
    consultation_form: "https://tally.so/r/b5ZZE7",
    social_links: &[
        SocialLink {
            platform: "instagram",
            url: "https://www.instagram.com/afterglow_mpls/",
            label: "Visit LEDream on Instagram",
        },
        SocialLink {
            platform: "facebook",
            url: "https://www.facebook.com/AfterGlow.Mpls",
            label: "Visit LEDream on Facebook",
        },
        SocialLink {
            platform: "youtube",
            url: "https://youtube.com/@afterglow_mpls",
            label: "Visit LEDream on YouTube",
        },
    ],
};

pub static PACKAGES: [Package; 3] = [
    Package {
        id: "spark",
        name: "The Spark",
        price: 5000,
        price_display: "$5,000+",
        tagline: "Ideal for intimate gatherings & boutique spaces to shine & surprise",
        description: "Perfect for intimate spaces. The Spark package includes immersive LED installations that transform key focal points into stunning visual experiences.",
        features: &[
            "Immersive LED installation of key focal points (entrances, bars, feature walls)",
            "Color-mapped lighting scenes tailored to your purpose",
            "1-2 signature LED art statement pieces designed to delight",
            "Hands-on training for simple control & automation",
        ],
        tier_color: TierColor::Blue,
        badge: Some("Perfect for intimate spaces"),
    },
    Package {
        id: "spectacle",
        name: "The Spectacle",
        price: 10000,
        price_display: "$10,000+",
        tagline: "For galas, ceremonies & larger spaces to enchant & enrapture",
        description: "Designed for larger events and spaces that demand a complete transformation. The Spectacle package creates an immersive environment that captivates and amazes.",
        features: &[
            "Everything in the Spark, plus:",
            "Full-room transformation with dynamic ceilings, walls & thresholds",
            "3-4 signature LED art statement pieces to enthrall & entrance",
            "Complete synchronization & training to create custom atmospheres",
        ],
        tier_color: TierColor::Purple,
        badge: Some("Most Popular"),
    },
    Package {
        id: "legend",
        name: "The Legend",
        price: 15000,
        price_display: "$15,000+",
        tagline: "For venues & clients who wish to become unforgettable",
        description: "The ultimate LEDream experience. The Legend package creates a multi-room immersive fantasy that becomes the talk of the town.",
        features: &[
            "Everything in the Spectacle, plus:",
            "Multi-room or whole-venue transformation",
            "Ultimate immersive fantasy atmosphere with dazzling designs",
            "Dedicated creative team to weave a custom narrative theme",
            "Ongoing service & maintenance",
        ],
        tier_color: TierColor::Magenta,
        badge: Some("Ultimate Experience"),
    },
];

pub static SERVICES: ServicesCatalog = ServicesCatalog {
    intro: "Are you ready to begin crafting magic? We offer custom-tailored experiences designed to transform your space into a living art masterpiece.",
    packages: &PACKAGES,
    common_inclusions: &[
        Inclusion {
            title: "Professional Consultation",
            description: "Expert guidance to understand your vision and space requirements",
        },
        Inclusion {
            title: "Custom Design",
            description: "Tailored design solutions that perfectly fit your space and purpose",
        },
        Inclusion {
            title: "Quality Materials",
            description: "Premium LED materials and hardware for lasting installations",
        },
        Inclusion {
            title: "Professional Installation",
            description: "Expert installation by our skilled team with attention to detail",
        },
        Inclusion {
            title: "Training & Support",
            description: "Comprehensive training and ongoing support for your team",
        },
    ],
    faq: &[
        FaqItem {
            question: "How do I choose the right package?",
            answer: "Consider your space size, event type, and desired impact. We offer free consultations to help you determine the best fit.",
        },
        FaqItem {
            question: "Can I upgrade my package later?",
            answer: "Yes! You can upgrade from The Spark to The Spectacle or from The Spectacle to The Legend.",
        },
        FaqItem {
            question: "What's the typical timeline for installation?",
            answer: "The Spark typically takes 1-2 weeks, The Spectacle 2-4 weeks, and The Legend 4-8 weeks.",
        },
        FaqItem {
            question: "Do you offer ongoing support?",
            answer: "All packages include initial training and support. The Legend package includes dedicated ongoing service and maintenance.",
        },
    ],
};

const RESIDENTIAL_EVENT: &[ProjectCategory] = &[ProjectCategory::Residential, ProjectCategory::Event];
const COMMERCIAL_EVENT: &[ProjectCategory] = &[ProjectCategory::Commercial, ProjectCategory::Event];

pub static PROJECTS: [Project; 6] = [
    Project {
        id: "psychedelic-funhouse-fantasy",
        title: "Psychedelic Funhouse Fantasy",
        description: "We transformed an unremarkable living room into an out-of-this-world wonderland that left jaws open and cameras rolling.",
        category: ProjectCategory::Residential,
        video_url: Some("https://www.youtube.com/watch?v=Rl8RiOAwhac"),
        images: &["/7.JPG", "/2.JPG", "/3.jpg"],
        tags: RESIDENTIAL_EVENT,
        featured: true,
        client: None,
        location: None,
        external_link: None,
        external_link_label: None,
    },
    Project {
        id: "fantasy-jungle-nightclub",
        title: "Fantasy Jungle Nightclub",
        description: "We transformed Conga Latin Bistro into a psychedelic canopy of green LEDs, radiant flora & lasting impressions.",
        category: ProjectCategory::Commercial,
        video_url: Some("https://youtu.be/MGYK27frO-g"),
        images: &["/3.jpg", "/5.JPG", "/6.JPG"],
        tags: COMMERCIAL_EVENT,
        featured: true,
        client: Some("Conga Latin Bistro"),
        location: Some("AfterGlow: Reefer Dreamers"),
        external_link: None,
        external_link_label: None,
    },
    Project {
        id: "halloween-in-wonderland",
        title: "Halloween in Wonderland",
        description: "We transformed an ordinary event space into an Alice in Wonderland meets Halloween psychedelic magnum opus.",
        category: ProjectCategory::Commercial,
        video_url: Some("https://www.youtube.com/watch?v=jjaO22Xkdq0"),
        images: &["/4.JPG", "/8.JPG", "/9.JPG"],
        tags: COMMERCIAL_EVENT,
        featured: true,
        client: None,
        location: None,
        external_link: Some("https://allenphotoworks.pixieset.com/20241019-halloweeninwonderland"),
        external_link_label: Some("View Photo Gallery"),
    },
    Project {
        id: "outer-space-symphony",
        title: "Outer Space Symphony",
        description: "We transformed Central Mix into an outer space opera house in psychedelic Neon & LED.",
        category: ProjectCategory::Commercial,
        video_url: Some("https://www.youtube.com/watch?v=-BxYNe_wx7s"),
        images: &["/oss.JPG", "/11.JPG", "/12.jpg"],
        tags: COMMERCIAL_EVENT,
        featured: true,
        client: None,
        location: Some("Central Mix"),
        external_link: None,
        external_link_label: None,
    },
    Project {
        id: "journey-to-bowsers-castle",
        title: "Journey to Bowser's Castle",
        description: "We transformed Jester's Wondrous Funhouse into a futuristic Bowser's Castle fantasyland in psychedelic Neon & LED.",
        category: ProjectCategory::Residential,
        video_url: None,
        images: &["/bowser.jpg", "/17.jpg", "/18.jpg"],
        tags: RESIDENTIAL_EVENT,
        featured: true,
        client: None,
        location: Some("Jester's Wondrous Funhouse"),
        external_link: Some("https://allenphotoworks.pixieset.com/20250301-afterglowmpls-journeytobowserscastle/"),
        external_link_label: Some("View Photo Gallery"),
    },
    Project {
        id: "untamed-halloween",
        title: "Untamed Halloween",
        description: "We transformed Jester's Wondrous Funhouse to a fantasy Halloween jungle in psychedelic Neon & LED.",
        category: ProjectCategory::Residential,
        video_url: None,
        images: &["/untamed.jpg", "/23.jpg"],
        tags: RESIDENTIAL_EVENT,
        featured: false,
        client: None,
        location: Some("Jester's Wondrous Funhouse"),
        external_link: Some("https://pixellephotos.pixieset.com/afterglow"),
        external_link_label: Some("View Photo Gallery"),
    },
];

pub static PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        step: 1,
        title: "Vision-Crafting Consultation",
        description: "We'll begin by formulating your vision, surveying your space & sculpting a proposal that balances creativity with your budget.",
        icon: ProcessIcon::Consultation,
        what_to_expect: &[
            "Initial consultation (phone or in-person)",
            "Space survey and measurements",
            "Vision discussion and mood boarding",
            "Custom proposal development",
            "Budget alignment",
        ],
        timeline: "1-2 weeks",
    },
    ProcessStep {
        step: 2,
        title: "Full-Scale Installation",
        description: "Our team of artisans & technicians will transform your space on your preferred schedule & availability.",
        icon: ProcessIcon::Installation,
        what_to_expect: &[
            "Professional installation team",
            "Minimal disruption to your schedule",
            "Quality materials and craftsmanship",
            "Real-time updates and communication",
            "Attention to detail",
        ],
        timeline: "1-4 weeks (depending on package)",
    },
    ProcessStep {
        step: 3,
        title: "Seamless Integration & Training",
        description: "We will empower your team with expert training for effortless control, automation & synchronization of your fantasy environment.",
        icon: ProcessIcon::Training,
        what_to_expect: &[
            "Hands-on training session",
            "Control system walkthrough",
            "Troubleshooting guidance",
            "Documentation and resources",
            "Ongoing support options",
        ],
        timeline: "1-2 days",
    },
];

pub fn find_project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
