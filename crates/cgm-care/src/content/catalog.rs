//! Static catalog backing the content pages and the catalog API.

use serde::Serialize;

pub const COMPANY_NAME: &str = "CGM Care";
pub const SUPPORT_PHONE: &str = "1-800-CGM-CARE";
pub const SUPPORT_EMAIL: &str = "support@cgmcare.com";
pub const COMPLIANCE_EMAIL: &str = "compliance@cgmcare.com";

pub const CONTACT_CONSENT_NOTICE: &str = "By clicking 'Check Coverage,' you agree to our Privacy Policy and authorize us and our partners to contact you at the number provided (including via autodialer, prerecorded message, and text). Consent not required for purchase.";

#[derive(Debug, Clone, Copy, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const MAIN_NAVIGATION: &[NavLink] = &[
    NavLink { label: "Coverage", href: "/check-coverage" },
    NavLink { label: "CGM", href: "/cgm" },
    NavLink { label: "Supplies", href: "/supplies" },
    NavLink { label: "Pumps & Sensors", href: "/pumps-sensors" },
    NavLink { label: "How It Works", href: "/how-it-works" },
    NavLink { label: "For Clinics", href: "/for-clinics" },
    NavLink { label: "Pricing", href: "/pricing" },
    NavLink { label: "About", href: "/about" },
];

pub const SUPPORT_LINKS: &[NavLink] = &[
    NavLink { label: "Patient Portal", href: "/patient-portal" },
    NavLink { label: "Contact Support", href: "/about#contact" },
    NavLink { label: "FAQ", href: "/cgm#faq" },
];

pub const LEGAL_LINKS: &[NavLink] = &[
    NavLink { label: "Privacy Policy", href: "/compliance#privacy" },
    NavLink { label: "HIPAA Notice", href: "/compliance#hipaa" },
    NavLink { label: "Terms of Service", href: "/compliance#terms" },
    NavLink { label: "Accessibility", href: "/compliance#accessibility" },
];

/// CGM device offered for insurance fulfilment or cash pay. Prices are in cents.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CgmDevice {
    pub key: &'static str,
    pub name: &'static str,
    pub brand: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub price_cents: u32,
    pub monthly_cents: u32,
    pub features: &'static [&'static str],
    pub popular: bool,
    pub in_stock: bool,
}

pub const CGM_DEVICES: &[CgmDevice] = &[
    CgmDevice {
        key: "dexcom-g7",
        name: "Dexcom G7",
        brand: "Dexcom",
        summary: "Latest generation with 10-day wear",
        description: "Latest generation with 10-day wear and improved accuracy",
        price_cents: 29_900,
        monthly_cents: 8_900,
        features: &["10-day wear", "Real-time alerts", "Smartphone app", "Waterproof"],
        popular: true,
        in_stock: true,
    },
    CgmDevice {
        key: "dexcom-g6",
        name: "Dexcom G6",
        brand: "Dexcom",
        summary: "Proven reliability with 10-day wear",
        description: "Proven reliability with 10-day wear and no fingerstick calibrations",
        price_cents: 24_900,
        monthly_cents: 7_900,
        features: &["10-day wear", "No calibration needed", "Share feature", "Waterproof"],
        popular: false,
        in_stock: true,
    },
    CgmDevice {
        key: "freestyle-libre-3",
        name: "FreeStyle Libre 3",
        brand: "Abbott",
        summary: "Smallest sensor with 14-day wear",
        description: "Smallest sensor with 14-day wear and continuous monitoring",
        price_cents: 19_900,
        monthly_cents: 6_900,
        features: &["14-day wear", "Smallest sensor", "No scanning needed", "Waterproof"],
        popular: false,
        in_stock: true,
    },
    CgmDevice {
        key: "freestyle-libre-2",
        name: "FreeStyle Libre 2",
        brand: "Abbott",
        summary: "Popular choice with 14-day wear",
        description: "Popular choice with 14-day wear and optional alarms",
        price_cents: 17_900,
        monthly_cents: 5_900,
        features: &["14-day wear", "Optional alarms", "No calibration", "Waterproof"],
        popular: false,
        in_stock: true,
    },
];

pub fn find_device(key: &str) -> Option<&'static CgmDevice> {
    CGM_DEVICES.iter().find(|device| device.key == key)
}

/// Whole dollars render without cents ("$299"); anything else keeps two places ("$0.45").
pub fn format_usd(cents: u32) -> String {
    let dollars = cents / 100;
    let remainder = cents % 100;
    if remainder == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{remainder:02}")
    }
}

/// Plan-level coverage facts for a supply category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CoverageInfo {
    pub medicare: bool,
    pub ppo: bool,
    pub prior_auth_required: bool,
    pub requirements: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_limit: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_limit: Option<u16>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupplyCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub coverage_summary: &'static str,
    pub coverage: CoverageInfo,
}

pub const SUPPLY_CATEGORIES: &[SupplyCategory] = &[
    SupplyCategory {
        key: "diabetic-shoes",
        name: "Diabetic Shoes",
        description: "Specialized footwear designed to reduce pressure and prevent foot complications",
        items: &[
            "Custom diabetic shoes",
            "Extra-depth shoes",
            "Orthotic inserts",
            "Compression socks",
        ],
        coverage_summary: "Covered under Medicare Part B with proper documentation",
        coverage: CoverageInfo {
            medicare: true,
            ppo: true,
            prior_auth_required: true,
            requirements: &["Documentation from podiatrist"],
            monthly_limit: None,
            yearly_limit: Some(1),
        },
    },
    SupplyCategory {
        key: "glucose-monitors",
        name: "Blood Glucose Monitors",
        description: "Essential devices for daily blood sugar monitoring",
        items: &["Glucometers", "Test strips", "Lancets", "Lancing devices"],
        coverage_summary: "Covered by most insurance plans with prescription",
        coverage: CoverageInfo {
            medicare: true,
            ppo: true,
            prior_auth_required: false,
            requirements: &["Prescription"],
            monthly_limit: None,
            yearly_limit: Some(1),
        },
    },
    SupplyCategory {
        key: "smart-monitors",
        name: "Smart Watches & Monitors",
        description: "Advanced monitoring devices for comprehensive diabetes management",
        items: &[
            "Smart insulin pens",
            "Continuous glucose monitors",
            "Insulin pumps",
            "Mobile health apps",
        ],
        coverage_summary: "Coverage varies by plan and medical necessity",
        coverage: CoverageInfo {
            medicare: true,
            ppo: true,
            prior_auth_required: true,
            requirements: &["Prescription", "Medical necessity documentation"],
            monthly_limit: None,
            yearly_limit: None,
        },
    },
    SupplyCategory {
        key: "testing-supplies",
        name: "Testing Supplies",
        description: "Daily essentials for blood glucose monitoring",
        items: &[
            "Test strips (various brands)",
            "Lancets (various gauges)",
            "Control solutions",
            "Carrying cases",
        ],
        coverage_summary: "Covered by most insurance with prescription",
        coverage: CoverageInfo {
            medicare: true,
            ppo: true,
            prior_auth_required: false,
            requirements: &["Prescription"],
            monthly_limit: Some(100),
            yearly_limit: None,
        },
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanCoverageRules {
    pub plan: &'static str,
    pub rules: &'static [&'static str],
}

pub const PLAN_COVERAGE_RULES: &[PlanCoverageRules] = &[
    PlanCoverageRules {
        plan: "Medicare Part B",
        rules: &[
            "Diabetic shoes: Covered with proper documentation from podiatrist",
            "Test strips: Up to 100 per month with prescription",
            "Lancets: Up to 100 per month with prescription",
            "Glucometer: One per year with prescription",
        ],
    },
    PlanCoverageRules {
        plan: "PPO Insurance",
        rules: &[
            "Coverage varies by specific plan",
            "Prior authorization may be required",
            "Copays and deductibles apply",
            "Quantity limits may apply",
        ],
    },
    PlanCoverageRules {
        plan: "Cash Pay",
        rules: &[
            "Transparent pricing available",
            "HSA/FSA cards accepted",
            "Payment plans available",
            "No insurance paperwork required",
        ],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PricedSupply {
    pub name: &'static str,
    pub price: &'static str,
    pub quantity: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PriceListGroup {
    pub category: &'static str,
    pub items: &'static [PricedSupply],
}

pub const SUPPLY_PRICE_LIST: &[PriceListGroup] = &[
    PriceListGroup {
        category: "Test Strips",
        items: &[
            PricedSupply { name: "OneTouch Verio Test Strips", price: "$0.50/strip", quantity: "100 strips" },
            PricedSupply { name: "Accu-Chek Guide Test Strips", price: "$0.45/strip", quantity: "100 strips" },
            PricedSupply { name: "FreeStyle Lite Test Strips", price: "$0.40/strip", quantity: "100 strips" },
        ],
    },
    PriceListGroup {
        category: "Lancets",
        items: &[
            PricedSupply { name: "OneTouch Delica Lancets", price: "$0.10/lancet", quantity: "100 lancets" },
            PricedSupply { name: "Accu-Chek Softclix Lancets", price: "$0.08/lancet", quantity: "100 lancets" },
            PricedSupply { name: "FreeStyle Lancets", price: "$0.06/lancet", quantity: "100 lancets" },
        ],
    },
    PriceListGroup {
        category: "Diabetic Shoes",
        items: &[
            PricedSupply { name: "Custom Diabetic Shoes", price: "$150-300", quantity: "per pair" },
            PricedSupply { name: "Extra-Depth Shoes", price: "$80-150", quantity: "per pair" },
            PricedSupply { name: "Orthotic Inserts", price: "$50-100", quantity: "per pair" },
        ],
    },
    PriceListGroup {
        category: "Monitors & Accessories",
        items: &[
            PricedSupply { name: "Blood Glucose Monitor", price: "$25-50", quantity: "per device" },
            PricedSupply { name: "Carrying Case", price: "$15-25", quantity: "per case" },
            PricedSupply { name: "Control Solution", price: "$8-12", quantity: "per bottle" },
        ],
    },
];

/// Generic titled blurb used by several pages (payment options, benefits, badges, services).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PAYMENT_OPTIONS: &[Feature] = &[
    Feature {
        title: "HSA/FSA Accepted",
        description: "Use your Health Savings Account or Flexible Spending Account",
    },
    Feature {
        title: "Payment Plans Available",
        description: "Flexible payment options to fit your budget",
    },
    Feature {
        title: "Secure Payments",
        description: "All payments processed securely with encryption",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DeviceFamily {
    pub name: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub brands: &'static [&'static str],
}

pub const PUMP_AND_SENSOR_FAMILIES: &[DeviceFamily] = &[
    DeviceFamily {
        name: "Insulin Pumps",
        description: "Advanced insulin delivery systems for precise diabetes management",
        features: &[
            "Continuous insulin delivery",
            "Programmable basal rates",
            "Bolus calculations",
            "Integration with CGM",
        ],
        brands: &["Medtronic", "Tandem", "Omnipod", "Insulet"],
    },
    DeviceFamily {
        name: "CGM Sensors",
        description: "Continuous glucose monitoring sensors for real-time blood sugar tracking",
        features: &[
            "Real-time glucose readings",
            "Trend analysis",
            "Alert systems",
            "Data sharing capabilities",
        ],
        brands: &["Dexcom", "FreeStyle Libre", "Medtronic", "Eversense"],
    },
    DeviceFamily {
        name: "Hybrid Systems",
        description: "Integrated pump and sensor systems for automated diabetes management",
        features: &[
            "Automated insulin delivery",
            "Smart algorithms",
            "Reduced manual intervention",
            "Improved glucose control",
        ],
        brands: &["Tandem Control-IQ", "Medtronic MiniMed", "Omnipod 5"],
    },
];

pub const DOCTOR_COORDINATION_STEPS: &[Feature] = &[
    Feature {
        title: "Medical Assessment",
        description: "We coordinate with your doctor to assess your diabetes management needs and determine the best device for you.",
    },
    Feature {
        title: "Insurance Verification",
        description: "Our team verifies your insurance coverage and handles all prior authorization requirements.",
    },
    Feature {
        title: "Device Selection",
        description: "We work with you and your doctor to select the most appropriate pump or sensor system.",
    },
    Feature {
        title: "Training & Setup",
        description: "We coordinate training sessions and ensure proper setup with ongoing support.",
    },
];

pub const ADVANCED_DEVICE_BENEFITS: &[Feature] = &[
    Feature {
        title: "Improved Glucose Control",
        description: "Better A1C levels and reduced glucose variability",
    },
    Feature {
        title: "Reduced Hypoglycemia",
        description: "Fewer low blood sugar episodes with advanced monitoring",
    },
    Feature {
        title: "Better Quality of Life",
        description: "More flexibility and less daily diabetes management burden",
    },
    Feature {
        title: "Data Insights",
        description: "Comprehensive glucose data to optimize your diabetes care",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub timeline: &'static str,
}

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Check Coverage",
        description: "Complete our quick eligibility quiz to see if your insurance covers CGM and diabetic supplies.",
        details: &[
            "Insurance verification",
            "Eligibility determination",
            "No obligation required",
        ],
        timeline: "Immediate",
    },
    ProcessStep {
        title: "We Handle Your Paperwork",
        description: "Our team handles all the insurance paperwork, prior authorizations, and coordination with your doctor.",
        details: &[
            "Prior authorization submission",
            "Insurance coordination",
            "Doctor communication",
            "Documentation management",
        ],
        timeline: "1-3 business days",
    },
    ProcessStep {
        title: "We Coordinate RX & Shipping",
        description: "We coordinate with your doctor for prescriptions and ship your supplies directly to your door.",
        details: &[
            "Prescription coordination",
            "Device setup",
            "Direct shipping",
            "Ongoing support",
        ],
        timeline: "3-7 business days",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequirementGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const REQUIRED_INFORMATION: &[RequirementGroup] = &[
    RequirementGroup {
        category: "Insurance Information",
        items: &[
            "Insurance card (front and back)",
            "Member ID number",
            "Group number (if applicable)",
            "Primary care physician information",
        ],
    },
    RequirementGroup {
        category: "Medical Information",
        items: &[
            "Diabetes type and diagnosis date",
            "Current medications",
            "Recent lab results (A1C)",
            "Current monitoring method",
        ],
    },
    RequirementGroup {
        category: "Contact Information",
        items: &[
            "Full name and date of birth",
            "Phone number and email",
            "Shipping address",
            "Emergency contact information",
        ],
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimelinePhase {
    pub phase: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const FULFILMENT_TIMELINE: &[TimelinePhase] = &[
    TimelinePhase {
        phase: "Initial Assessment",
        duration: "Same day",
        description: "Complete eligibility quiz and submit required documents",
    },
    TimelinePhase {
        phase: "Insurance Verification",
        duration: "1-2 business days",
        description: "We verify your coverage and determine benefits",
    },
    TimelinePhase {
        phase: "Prior Authorization",
        duration: "2-5 business days",
        description: "Submit and track prior authorization with your insurance",
    },
    TimelinePhase {
        phase: "Prescription Coordination",
        duration: "1-2 business days",
        description: "Work with your doctor to obtain proper prescriptions",
    },
    TimelinePhase {
        phase: "Device Shipping",
        duration: "3-7 business days",
        description: "Ship your CGM device and supplies to your door",
    },
    TimelinePhase {
        phase: "Setup & Training",
        duration: "1-2 business days",
        description: "Coordinate device setup and provide training support",
    },
];

pub const CLINIC_SERVICES: &[Feature] = &[
    Feature {
        title: "Same-Day Eligibility",
        description: "Get instant eligibility verification for your patients",
    },
    Feature {
        title: "E-Fax Prescriptions",
        description: "Send prescriptions directly through our secure e-fax system",
    },
    Feature {
        title: "Patient Portal",
        description: "Track patient status and manage referrals in real-time",
    },
    Feature {
        title: "Dedicated Support",
        description: "Get dedicated support for your practice and patients",
    },
];

pub const CLINIC_BENEFITS: &[&str] = &[
    "Keep your staff focused on patient care",
    "Reduce administrative burden",
    "Improve patient satisfaction",
    "Streamline referral process",
    "Real-time status updates",
    "HIPAA-compliant platform",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Resource {
    pub name: &'static str,
    pub description: &'static str,
    pub format: &'static str,
}

pub const REFERRAL_KIT: &[Resource] = &[
    Resource {
        name: "Provider Referral Form",
        description: "Streamlined form for patient referrals",
        format: "PDF",
    },
    Resource {
        name: "Insurance Coverage Guide",
        description: "Quick reference for coverage requirements",
        format: "PDF",
    },
    Resource {
        name: "Patient Education Materials",
        description: "Educational resources for your patients",
        format: "PDF",
    },
    Resource {
        name: "E-Fax Cover Sheet",
        description: "Secure prescription transmission template",
        format: "PDF",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PortalModule {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const PROVIDER_PORTAL_MODULES: &[PortalModule] = &[
    PortalModule {
        title: "Patient Management",
        description: "View all your referred patients in one dashboard",
        features: &[
            "Patient status tracking",
            "Insurance verification status",
            "Document upload status",
            "Communication history",
        ],
    },
    PortalModule {
        title: "Prescription Management",
        description: "Send and track prescriptions securely",
        features: &[
            "E-fax integration",
            "Prescription templates",
            "Status tracking",
            "Automated reminders",
        ],
    },
    PortalModule {
        title: "Reporting & Analytics",
        description: "Track your referral success and patient outcomes",
        features: &[
            "Referral statistics",
            "Success rates",
            "Patient satisfaction",
            "Performance metrics",
        ],
    },
];

pub const PATIENT_PORTAL_PREVIEW: &[Feature] = &[
    Feature {
        title: "Document Management",
        description: "Upload and manage your insurance documents, prescriptions, and lab results.",
    },
    Feature {
        title: "Application Tracking",
        description: "Track your coverage application status and see real-time updates.",
    },
    Feature {
        title: "Account Settings",
        description: "Update your personal information and manage your account settings.",
    },
    Feature {
        title: "Activity History",
        description: "View your complete activity history and communication timeline.",
    },
];

pub const TRUST_BADGES: &[Feature] = &[
    Feature {
        title: "HIPAA Compliant",
        description: "Fully compliant with HIPAA privacy and security standards",
    },
    Feature {
        title: "Medicare Certified",
        description: "Certified Medicare Part B supplier for diabetic supplies",
    },
    Feature {
        title: "State Licensed",
        description: "Licensed to operate in all 50 states",
    },
];

pub const STATES_SERVED: &[&str] = &[
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado",
    "Connecticut", "Delaware", "Florida", "Georgia", "Hawaii", "Idaho",
    "Illinois", "Indiana", "Iowa", "Kansas", "Kentucky", "Louisiana",
    "Maine", "Maryland", "Massachusetts", "Michigan", "Minnesota", "Mississippi",
    "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire", "New Jersey",
    "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio", "Oklahoma",
    "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington",
    "West Virginia", "Wisconsin", "Wyoming",
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SupportHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const SUPPORT_HOURS: &[SupportHours] = &[
    SupportHours { days: "Monday - Friday", hours: "8:00 AM - 8:00 PM EST" },
    SupportHours { days: "Saturday", hours: "9:00 AM - 5:00 PM EST" },
    SupportHours { days: "Sunday", hours: "10:00 AM - 4:00 PM EST" },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContactChannel {
    pub kind: &'static str,
    pub value: &'static str,
    pub description: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        kind: "Phone",
        value: SUPPORT_PHONE,
        description: "Call us for immediate assistance",
    },
    ContactChannel {
        kind: "Email",
        value: SUPPORT_EMAIL,
        description: "Email us for non-urgent inquiries",
    },
    ContactChannel {
        kind: "Address",
        value: "123 Healthcare Ave, Suite 100\nMedical City, MC 12345",
        description: "Our headquarters location",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ComplianceSection {
    pub id: &'static str,
    pub title: &'static str,
    pub overview: &'static str,
    pub key_points: &'static [&'static str],
    pub contact: &'static str,
}

pub const COMPLIANCE_SECTIONS: &[ComplianceSection] = &[
    ComplianceSection {
        id: "hipaa",
        title: "HIPAA Notice of Privacy Practices",
        overview: "We are committed to protecting the privacy and security of your protected health information (PHI) in accordance with the Health Insurance Portability and Accountability Act (HIPAA).",
        key_points: &[
            "We use and disclose PHI only as necessary for treatment, payment, and healthcare operations",
            "You have the right to access, amend, and request restrictions on your PHI",
            "We maintain administrative, physical, and technical safeguards to protect your information",
            "We will notify you of any breach of unsecured PHI",
            "You may file a complaint with us or the Department of Health and Human Services",
        ],
        contact: "For questions about our privacy practices, contact our Privacy Officer at privacy@cgmcare.com or 1-800-CGM-CARE.",
    },
    ComplianceSection {
        id: "tcpa",
        title: "TCPA Disclosure",
        overview: "By providing your phone number and checking the consent box, you agree to receive calls and text messages from CGM Care and our partners.",
        key_points: &[
            "Calls may be made using automated dialing systems and prerecorded messages",
            "Text messages may be sent to the number you provide",
            "You may opt out at any time by replying STOP to text messages or calling us",
            "Message and data rates may apply",
            "Consent is not required as a condition of purchase",
        ],
        contact: "To opt out of communications, call 1-800-CGM-CARE or email optout@cgmcare.com.",
    },
    ComplianceSection {
        id: "privacy",
        title: "Privacy Policy",
        overview: "This privacy policy describes how we collect, use, and protect your personal information when you use our services.",
        key_points: &[
            "We collect information you provide directly to us and through your use of our services",
            "We use cookies and similar technologies to improve your experience",
            "We may share information with service providers and business partners",
            "We implement appropriate security measures to protect your information",
            "We may update this policy from time to time",
        ],
        contact: "For privacy questions, contact us at privacy@cgmcare.com.",
    },
    ComplianceSection {
        id: "cookies",
        title: "Cookie Policy",
        overview: "We use cookies and similar technologies to enhance your browsing experience and analyze website traffic.",
        key_points: &[
            "Essential cookies are necessary for the website to function properly",
            "Analytics cookies help us understand how visitors use our website",
            "Marketing cookies are used to deliver relevant advertisements",
            "You can control cookie settings through your browser preferences",
            "Disabling cookies may affect website functionality",
        ],
        contact: "For cookie-related questions, contact us at privacy@cgmcare.com.",
    },
    ComplianceSection {
        id: "accessibility",
        title: "Accessibility Statement",
        overview: "We are committed to ensuring digital accessibility for people with disabilities and strive to provide an accessible user experience.",
        key_points: &[
            "We follow WCAG 2.2 AA guidelines for web accessibility",
            "Our website is designed to be compatible with assistive technologies",
            "We provide alternative text for images and proper heading structure",
            "We ensure sufficient color contrast and keyboard navigation support",
            "We welcome feedback on accessibility issues",
        ],
        contact: "For accessibility concerns, contact us at accessibility@cgmcare.com or 1-800-CGM-CARE.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct LegalDocument {
    pub name: &'static str,
    pub description: &'static str,
    pub last_updated: &'static str,
}

pub const LEGAL_DOCUMENTS: &[LegalDocument] = &[
    LegalDocument {
        name: "Terms of Service",
        description: "Terms and conditions for using our services",
        last_updated: "December 1, 2024",
    },
    LegalDocument {
        name: "Privacy Policy",
        description: "How we collect, use, and protect your information",
        last_updated: "December 1, 2024",
    },
    LegalDocument {
        name: "HIPAA Notice",
        description: "Your rights regarding protected health information",
        last_updated: "December 1, 2024",
    },
    LegalDocument {
        name: "Cookie Policy",
        description: "Information about our use of cookies and tracking",
        last_updated: "December 1, 2024",
    },
];

pub const DATA_SECURITY_MEASURES: &[Feature] = &[
    Feature {
        title: "Encryption",
        description: "All data is encrypted in transit and at rest using industry-standard encryption protocols.",
    },
    Feature {
        title: "Access Controls",
        description: "Strict access controls ensure only authorized personnel can access your information.",
    },
    Feature {
        title: "Audit Logs",
        description: "Comprehensive audit logs track all access and modifications to your data.",
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Do I qualify under Medicare Part B?",
        answer: "Medicare Part B covers CGM for patients with diabetes who meet specific criteria, including insulin use and frequent blood glucose monitoring. We verify your eligibility and handle all paperwork.",
    },
    FaqEntry {
        question: "What if my PPO requires prior authorization?",
        answer: "We handle all prior authorization paperwork for you. Our team works directly with your insurance company and doctor to get approval quickly.",
    },
    FaqEntry {
        question: "How long does it take to get approved?",
        answer: "Most approvals are processed within 1-3 business days. We keep you updated throughout the entire process via your patient portal.",
    },
    FaqEntry {
        question: "What if I'm not covered by insurance?",
        answer: "We offer transparent cash-pay options with competitive pricing. HSA/FSA cards are accepted, and payment plans are available.",
    },
    FaqEntry {
        question: "Do you work with my doctor?",
        answer: "Yes! We coordinate directly with your healthcare provider to ensure proper prescriptions and medical oversight.",
    },
    FaqEntry {
        question: "What supplies are included?",
        answer: "We provide the CGM device, sensors, and all necessary supplies. Replacement sensors are automatically shipped based on your insurance coverage.",
    },
];

/// Questions surfaced in the FAQ page schema; the rest only appear on the CGM page.
pub const STRUCTURED_FAQ_COUNT: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_dollars() {
        assert_eq!(format_usd(29_900), "$299");
        assert_eq!(format_usd(45), "$0.45");
        assert_eq!(format_usd(1_205), "$12.05");
        assert_eq!(format_usd(0), "$0");
    }

    #[test]
    fn exactly_one_device_is_marked_popular() {
        let popular: Vec<_> = CGM_DEVICES.iter().filter(|device| device.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Dexcom G7");
        assert!(find_device("freestyle-libre-2").is_some());
        assert!(find_device("omnipod").is_none());
    }

    #[test]
    fn catalog_covers_every_state() {
        assert_eq!(STATES_SERVED.len(), 50);
        assert!(STRUCTURED_FAQ_COUNT <= FAQ.len());
    }
}
