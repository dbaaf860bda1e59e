//! Fixed suggestion catalogs. Seed data, loaded into the binary, shared by
//! reference across all queries and never mutated at runtime.

pub struct JobTitle {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub struct Skill {
    pub skill: &'static str,
    pub category: &'static str,
    /// Base relevance, 0.0..=1.0. Per-query derived relevance starts here.
    pub relevance: f64,
}

pub struct Place {
    pub place_id: &'static str,
    pub description: &'static str,
    pub formatted_address: &'static str,
    pub types: &'static [&'static str],
    pub lat: f64,
    pub lng: f64,
}

/// Keyword found in a job title -> skill category that gets boosted.
pub const TITLE_KEYWORD_BOOSTS: &[(&str, &str)] = &[
    ("developer", "Programming"),
    ("designer", "Design"),
    ("writer", "Writing"),
    ("marketing", "Marketing"),
    ("manager", "Business"),
];

/// Fixed boost added to a skill's base relevance when its category matches
/// a keyword in the job-title hint. Clamped so derived relevance stays <= 1.0.
pub const CATEGORY_BOOST: f64 = 0.2;

pub const JOB_TITLES: &[JobTitle] = &[
    // Technology
    JobTitle { title: "Software Developer", category: "Technology", description: "Develop and maintain software applications" },
    JobTitle { title: "Frontend Developer", category: "Technology", description: "Build user interfaces and client-side applications" },
    JobTitle { title: "Backend Developer", category: "Technology", description: "Develop server-side applications and APIs" },
    JobTitle { title: "Full Stack Developer", category: "Technology", description: "Work on both frontend and backend development" },
    JobTitle { title: "Mobile App Developer", category: "Technology", description: "Create mobile applications for iOS/Android" },
    JobTitle { title: "Data Scientist", category: "Technology", description: "Analyze data and build machine learning models" },
    JobTitle { title: "DevOps Engineer", category: "Technology", description: "Manage infrastructure and deployment pipelines" },
    JobTitle { title: "UI/UX Designer", category: "Technology", description: "Design user interfaces and user experiences" },
    JobTitle { title: "Product Manager", category: "Technology", description: "Manage product development and strategy" },
    JobTitle { title: "QA Engineer", category: "Technology", description: "Test software and ensure quality" },
    // Design & Creative
    JobTitle { title: "Graphic Designer", category: "Design", description: "Create visual designs and graphics" },
    JobTitle { title: "Web Designer", category: "Design", description: "Design websites and web applications" },
    JobTitle { title: "Logo Designer", category: "Design", description: "Create logos and brand identities" },
    JobTitle { title: "Video Editor", category: "Design", description: "Edit and produce video content" },
    JobTitle { title: "Photographer", category: "Design", description: "Take professional photographs" },
    JobTitle { title: "Illustrator", category: "Design", description: "Create illustrations and artwork" },
    // Writing & Content
    JobTitle { title: "Content Writer", category: "Writing", description: "Write articles, blogs, and marketing content" },
    JobTitle { title: "Copywriter", category: "Writing", description: "Write persuasive marketing copy" },
    JobTitle { title: "Technical Writer", category: "Writing", description: "Write technical documentation" },
    JobTitle { title: "Social Media Manager", category: "Writing", description: "Manage social media accounts and content" },
    JobTitle { title: "SEO Specialist", category: "Writing", description: "Optimize content for search engines" },
    // Business & Marketing
    JobTitle { title: "Digital Marketer", category: "Marketing", description: "Manage digital marketing campaigns" },
    JobTitle { title: "Marketing Manager", category: "Marketing", description: "Plan and execute marketing strategies" },
    JobTitle { title: "Sales Representative", category: "Sales", description: "Sell products or services" },
    JobTitle { title: "Business Analyst", category: "Business", description: "Analyze business processes and data" },
    JobTitle { title: "Project Manager", category: "Business", description: "Manage projects and teams" },
    JobTitle { title: "Virtual Assistant", category: "Business", description: "Provide administrative support remotely" },
    JobTitle { title: "Account Manager", category: "Business", description: "Manage client relationships" },
    // Education & Training
    JobTitle { title: "Online Tutor", category: "Education", description: "Provide online tutoring services" },
    JobTitle { title: "Language Teacher", category: "Education", description: "Teach languages online" },
    JobTitle { title: "Fitness Instructor", category: "Education", description: "Provide fitness training and coaching" },
    // Essential Services & Trades
    JobTitle { title: "Plumber", category: "Trades", description: "Install, repair, and maintain plumbing systems" },
    JobTitle { title: "Electrician", category: "Trades", description: "Install, repair, and maintain electrical systems" },
    JobTitle { title: "Carpenter", category: "Trades", description: "Build and repair wooden structures and furniture" },
    JobTitle { title: "Painter", category: "Trades", description: "Paint interior and exterior surfaces" },
    JobTitle { title: "Mechanic", category: "Trades", description: "Repair and maintain vehicles and machinery" },
    JobTitle { title: "HVAC Technician", category: "Trades", description: "Install and repair heating, ventilation, and air conditioning" },
    JobTitle { title: "Welder", category: "Trades", description: "Join metal parts using welding techniques" },
    JobTitle { title: "Mason", category: "Trades", description: "Build structures using bricks, stones, and concrete" },
    JobTitle { title: "Roofer", category: "Trades", description: "Install and repair roofs and roofing systems" },
    JobTitle { title: "Appliance Repair Technician", category: "Trades", description: "Repair household appliances" },
    JobTitle { title: "Phone Repair Technician", category: "Trades", description: "Repair and maintain mobile phones" },
    JobTitle { title: "Auto Mechanic", category: "Trades", description: "Repair and maintain automobiles" },
    // Delivery & Transportation
    JobTitle { title: "Delivery Driver", category: "Delivery", description: "Deliver packages and goods to customers" },
    JobTitle { title: "Food Delivery Driver", category: "Delivery", description: "Deliver food orders from restaurants" },
    JobTitle { title: "Swiggy Delivery Partner", category: "Delivery", description: "Deliver food orders through Swiggy platform" },
    JobTitle { title: "Zomato Delivery Partner", category: "Delivery", description: "Deliver food orders through Zomato platform" },
    JobTitle { title: "Taxi Driver", category: "Transportation", description: "Drive passengers to their destinations" },
    JobTitle { title: "Auto Rickshaw Driver", category: "Transportation", description: "Drive auto rickshaws for passengers" },
    JobTitle { title: "Truck Driver", category: "Transportation", description: "Drive trucks to transport goods" },
    // Services
    JobTitle { title: "Cleaner", category: "Services", description: "Clean residential and commercial spaces" },
    JobTitle { title: "Housekeeper", category: "Services", description: "Maintain cleanliness in homes and hotels" },
    JobTitle { title: "Security Guard", category: "Services", description: "Protect property and ensure safety" },
    JobTitle { title: "Receptionist", category: "Services", description: "Handle front desk operations and customer service" },
    JobTitle { title: "Cashier", category: "Services", description: "Process payments and handle customer transactions" },
    JobTitle { title: "Warehouse Worker", category: "Services", description: "Handle and organize warehouse inventory" },
    JobTitle { title: "Gardener", category: "Services", description: "Maintain gardens and outdoor spaces" },
    JobTitle { title: "Babysitter", category: "Services", description: "Care for children in their absence" },
    JobTitle { title: "Locksmith", category: "Services", description: "Install, repair, and open locks" },
    JobTitle { title: "Tailor", category: "Services", description: "Alter and repair clothing" },
    // Food Service
    JobTitle { title: "Cook", category: "Food Service", description: "Prepare meals in restaurants and kitchens" },
    JobTitle { title: "Chef", category: "Food Service", description: "Plan and prepare meals in professional kitchens" },
    JobTitle { title: "Waiter", category: "Food Service", description: "Take orders and serve customers in restaurants" },
    JobTitle { title: "Bartender", category: "Food Service", description: "Prepare and serve alcoholic beverages" },
    JobTitle { title: "Barista", category: "Food Service", description: "Prepare and serve coffee and beverages" },
    JobTitle { title: "Kitchen Helper", category: "Food Service", description: "Assist in food preparation and kitchen operations" },
    // Healthcare
    JobTitle { title: "Caregiver", category: "Healthcare", description: "Provide care and assistance to elderly or disabled" },
    JobTitle { title: "Home Health Aide", category: "Healthcare", description: "Provide in-home healthcare assistance" },
    JobTitle { title: "Nursing Assistant", category: "Healthcare", description: "Assist nurses with patient care" },
    // Construction
    JobTitle { title: "Construction Worker", category: "Construction", description: "Work on construction sites and building projects" },
    JobTitle { title: "Laborer", category: "Construction", description: "Perform manual labor on construction sites" },
    JobTitle { title: "Crane Operator", category: "Construction", description: "Operate cranes for lifting heavy materials" },
];

pub const SKILLS: &[Skill] = &[
    // Technology
    Skill { skill: "JavaScript", category: "Programming", relevance: 0.95 },
    Skill { skill: "Python", category: "Programming", relevance: 0.9 },
    Skill { skill: "React", category: "Frontend", relevance: 0.9 },
    Skill { skill: "Node.js", category: "Backend", relevance: 0.85 },
    Skill { skill: "TypeScript", category: "Programming", relevance: 0.85 },
    Skill { skill: "SQL", category: "Database", relevance: 0.8 },
    Skill { skill: "Git", category: "Tools", relevance: 0.75 },
    Skill { skill: "Docker", category: "DevOps", relevance: 0.7 },
    Skill { skill: "Machine Learning", category: "AI/ML", relevance: 0.65 },
    // Design
    Skill { skill: "Adobe Photoshop", category: "Design", relevance: 0.9 },
    Skill { skill: "Adobe Illustrator", category: "Design", relevance: 0.9 },
    Skill { skill: "Figma", category: "Design", relevance: 0.85 },
    Skill { skill: "UI Design", category: "Design", relevance: 0.9 },
    Skill { skill: "UX Design", category: "Design", relevance: 0.85 },
    Skill { skill: "Branding", category: "Design", relevance: 0.8 },
    // Writing
    Skill { skill: "Content Writing", category: "Writing", relevance: 0.9 },
    Skill { skill: "Copywriting", category: "Writing", relevance: 0.9 },
    Skill { skill: "SEO Writing", category: "Writing", relevance: 0.85 },
    Skill { skill: "Technical Writing", category: "Writing", relevance: 0.8 },
    Skill { skill: "Email Marketing", category: "Marketing", relevance: 0.75 },
    Skill { skill: "Social Media", category: "Marketing", relevance: 0.75 },
    // Business
    Skill { skill: "Project Management", category: "Business", relevance: 0.9 },
    Skill { skill: "Data Analysis", category: "Business", relevance: 0.85 },
    Skill { skill: "Excel", category: "Business", relevance: 0.8 },
    Skill { skill: "Sales", category: "Business", relevance: 0.8 },
    Skill { skill: "Customer Service", category: "Business", relevance: 0.75 },
    Skill { skill: "Communication", category: "Soft Skills", relevance: 0.9 },
    Skill { skill: "Leadership", category: "Soft Skills", relevance: 0.8 },
    // Trades
    Skill { skill: "Plumbing", category: "Trades", relevance: 0.95 },
    Skill { skill: "Electrical Work", category: "Trades", relevance: 0.95 },
    Skill { skill: "Carpentry", category: "Trades", relevance: 0.9 },
    Skill { skill: "Painting", category: "Trades", relevance: 0.85 },
    Skill { skill: "Welding", category: "Trades", relevance: 0.9 },
    Skill { skill: "HVAC", category: "Trades", relevance: 0.9 },
    Skill { skill: "Auto Repair", category: "Trades", relevance: 0.9 },
    Skill { skill: "Appliance Repair", category: "Trades", relevance: 0.85 },
    Skill { skill: "Phone Repair", category: "Trades", relevance: 0.8 },
    Skill { skill: "Locksmithing", category: "Trades", relevance: 0.85 },
    Skill { skill: "Tailoring", category: "Trades", relevance: 0.8 },
    // Delivery & Transportation
    Skill { skill: "Driving", category: "Transportation", relevance: 0.95 },
    Skill { skill: "Delivery", category: "Transportation", relevance: 0.9 },
    Skill { skill: "Food Delivery", category: "Transportation", relevance: 0.9 },
    Skill { skill: "Truck Driving", category: "Transportation", relevance: 0.9 },
    Skill { skill: "Route Planning", category: "Transportation", relevance: 0.7 },
    // Food Service
    Skill { skill: "Cooking", category: "Food Service", relevance: 0.9 },
    Skill { skill: "Food Preparation", category: "Food Service", relevance: 0.9 },
    Skill { skill: "Serving", category: "Food Service", relevance: 0.85 },
    Skill { skill: "Bartending", category: "Food Service", relevance: 0.8 },
    Skill { skill: "Food Safety", category: "Food Service", relevance: 0.9 },
    // Cleaning & Maintenance
    Skill { skill: "Housekeeping", category: "Cleaning", relevance: 0.9 },
    Skill { skill: "Janitorial", category: "Cleaning", relevance: 0.9 },
    Skill { skill: "Pest Control", category: "Cleaning", relevance: 0.8 },
    Skill { skill: "Laundry", category: "Cleaning", relevance: 0.8 },
    // Healthcare & Caregiving
    Skill { skill: "Caregiving", category: "Healthcare", relevance: 0.9 },
    Skill { skill: "Elderly Care", category: "Healthcare", relevance: 0.9 },
    Skill { skill: "Childcare", category: "Healthcare", relevance: 0.9 },
    Skill { skill: "First Aid", category: "Healthcare", relevance: 0.8 },
    // Construction
    Skill { skill: "Construction", category: "Construction", relevance: 0.9 },
    Skill { skill: "Manual Labor", category: "Construction", relevance: 0.9 },
    Skill { skill: "Safety Protocols", category: "Construction", relevance: 0.9 },
    Skill { skill: "Equipment Operation", category: "Construction", relevance: 0.8 },
    // Soft skills
    Skill { skill: "Time Management", category: "Soft Skills", relevance: 0.8 },
    Skill { skill: "Reliability", category: "Soft Skills", relevance: 0.9 },
    Skill { skill: "Punctuality", category: "Soft Skills", relevance: 0.9 },
    Skill { skill: "Teamwork", category: "Soft Skills", relevance: 0.8 },
];

pub const PLACES: &[Place] = &[
    Place { place_id: "1", description: "New York, NY, USA", formatted_address: "New York, NY, USA", types: &["locality", "political"], lat: 40.7128, lng: -74.0060 },
    Place { place_id: "2", description: "Los Angeles, CA, USA", formatted_address: "Los Angeles, CA, USA", types: &["locality", "political"], lat: 34.0522, lng: -118.2437 },
    Place { place_id: "3", description: "Chicago, IL, USA", formatted_address: "Chicago, IL, USA", types: &["locality", "political"], lat: 41.8781, lng: -87.6298 },
    Place { place_id: "4", description: "Houston, TX, USA", formatted_address: "Houston, TX, USA", types: &["locality", "political"], lat: 29.7604, lng: -95.3698 },
    Place { place_id: "5", description: "Phoenix, AZ, USA", formatted_address: "Phoenix, AZ, USA", types: &["locality", "political"], lat: 33.4484, lng: -112.0740 },
    Place { place_id: "6", description: "Philadelphia, PA, USA", formatted_address: "Philadelphia, PA, USA", types: &["locality", "political"], lat: 39.9526, lng: -75.1652 },
    Place { place_id: "7", description: "San Antonio, TX, USA", formatted_address: "San Antonio, TX, USA", types: &["locality", "political"], lat: 29.4241, lng: -98.4936 },
    Place { place_id: "8", description: "San Diego, CA, USA", formatted_address: "San Diego, CA, USA", types: &["locality", "political"], lat: 32.7157, lng: -117.1611 },
    Place { place_id: "9", description: "Dallas, TX, USA", formatted_address: "Dallas, TX, USA", types: &["locality", "political"], lat: 32.7767, lng: -96.7970 },
    Place { place_id: "10", description: "San Jose, CA, USA", formatted_address: "San Jose, CA, USA", types: &["locality", "political"], lat: 37.3382, lng: -121.8863 },
    Place { place_id: "11", description: "Austin, TX, USA", formatted_address: "Austin, TX, USA", types: &["locality", "political"], lat: 30.2672, lng: -97.7431 },
    Place { place_id: "12", description: "Jacksonville, FL, USA", formatted_address: "Jacksonville, FL, USA", types: &["locality", "political"], lat: 30.3322, lng: -81.6557 },
    Place { place_id: "13", description: "Fort Worth, TX, USA", formatted_address: "Fort Worth, TX, USA", types: &["locality", "political"], lat: 32.7555, lng: -97.3308 },
    Place { place_id: "14", description: "Columbus, OH, USA", formatted_address: "Columbus, OH, USA", types: &["locality", "political"], lat: 39.9612, lng: -82.9988 },
    Place { place_id: "15", description: "Charlotte, NC, USA", formatted_address: "Charlotte, NC, USA", types: &["locality", "political"], lat: 35.2271, lng: -80.8431 },
    Place { place_id: "16", description: "Remote", formatted_address: "Remote Work", types: &["establishment"], lat: 0.0, lng: 0.0 },
    Place { place_id: "17", description: "London, UK", formatted_address: "London, UK", types: &["locality", "political"], lat: 51.5074, lng: -0.1278 },
    Place { place_id: "18", description: "Toronto, ON, Canada", formatted_address: "Toronto, ON, Canada", types: &["locality", "political"], lat: 43.6532, lng: -79.3832 },
    Place { place_id: "19", description: "Sydney, NSW, Australia", formatted_address: "Sydney, NSW, Australia", types: &["locality", "political"], lat: -33.8688, lng: 151.2093 },
    Place { place_id: "20", description: "Berlin, Germany", formatted_address: "Berlin, Germany", types: &["locality", "political"], lat: 52.5200, lng: 13.4050 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes_cover_browse_defaults() {
        // Empty-query defaults slice the first 20 titles / 10 places.
        assert!(JOB_TITLES.len() >= 20);
        assert!(PLACES.len() >= 10);
    }

    #[test]
    fn test_skill_relevance_in_range() {
        for skill in SKILLS {
            assert!(
                (0.0..=1.0).contains(&skill.relevance),
                "{} out of range",
                skill.skill
            );
        }
    }

    #[test]
    fn test_place_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for place in PLACES {
            assert!(seen.insert(place.place_id), "duplicate {}", place.place_id);
        }
    }

    #[test]
    fn test_boost_table_categories_exist_in_skills() {
        for (_, category) in TITLE_KEYWORD_BOOSTS {
            assert!(
                SKILLS.iter().any(|s| s.category == *category),
                "no skill in category {}",
                category
            );
        }
    }
}
