//! Demo records shown when the store has no live data (or the fetch fails).
//! Materialized with `Origin::Demo` so mutations against them never reach
//! the store; they exist only in view-local state.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{Job, JobApplication, JobRequest, Origin};

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .expect("valid fixture timestamp")
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn demo_job_postings() -> Vec<Job> {
    vec![
        Job {
            id: "demo-job-1".to_string(),
            vendor_id: "demo-vendor-1".to_string(),
            title: "Food Delivery Driver - Zomato".to_string(),
            description: "Join our team as a food delivery partner! Flexible hours, good earnings, and the freedom to work when you want. Must have own two-wheeler and valid license.".to_string(),
            work_type: "Delivery".to_string(),
            required_skills: strings(&["Two-wheeler Driving", "Customer Service", "Time Management", "Navigation"]),
            pay_min: 250,
            pay_max: 400,
            location: "Mumbai, Maharashtra".to_string(),
            hours: 6,
            status: "open".to_string(),
            created_at: ts(2024, 1, 10, 8, 0),
            updated_at: ts(2024, 1, 10, 8, 0),
            origin: Origin::Demo,
        },
        Job {
            id: "demo-job-2".to_string(),
            vendor_id: "demo-vendor-2".to_string(),
            title: "House Cleaning Service Provider".to_string(),
            description: "We need reliable cleaners for residential properties. Work includes dusting, mopping, bathroom cleaning, and general maintenance. Flexible scheduling available.".to_string(),
            work_type: "Cleaning".to_string(),
            required_skills: strings(&["House Cleaning", "Dusting", "Mopping", "Bathroom Cleaning", "Reliability"]),
            pay_min: 350,
            pay_max: 550,
            location: "Delhi, NCR".to_string(),
            hours: 4,
            status: "open".to_string(),
            created_at: ts(2024, 1, 9, 10, 30),
            updated_at: ts(2024, 1, 9, 10, 30),
            origin: Origin::Demo,
        },
        Job {
            id: "demo-job-3".to_string(),
            vendor_id: "demo-vendor-3".to_string(),
            title: "Plumbing Services - Emergency Repairs".to_string(),
            description: "Join our emergency plumbing team! Handle urgent repairs, installations, and maintenance. Must have own tools and transportation. Good pay for experienced plumbers.".to_string(),
            work_type: "Plumbing".to_string(),
            required_skills: strings(&["Plumbing", "Emergency Repairs", "Tool Handling", "Problem Solving", "Customer Service"]),
            pay_min: 600,
            pay_max: 1000,
            location: "Bangalore, Karnataka".to_string(),
            hours: 8,
            status: "open".to_string(),
            created_at: ts(2024, 1, 8, 12, 15),
            updated_at: ts(2024, 1, 8, 12, 15),
            origin: Origin::Demo,
        },
        Job {
            id: "demo-job-4".to_string(),
            vendor_id: "demo-vendor-4".to_string(),
            title: "Electrician - Commercial Projects".to_string(),
            description: "We're looking for skilled electricians for commercial electrical work. Projects include office wiring, lighting installation, and electrical maintenance. Must have proper certifications.".to_string(),
            work_type: "Electrical".to_string(),
            required_skills: strings(&["Electrical Work", "Commercial Wiring", "Lighting Installation", "Safety Compliance", "Certification"]),
            pay_min: 800,
            pay_max: 1200,
            location: "Pune, Maharashtra".to_string(),
            hours: 8,
            status: "open".to_string(),
            created_at: ts(2024, 1, 7, 14, 45),
            updated_at: ts(2024, 1, 7, 14, 45),
            origin: Origin::Demo,
        },
        Job {
            id: "demo-job-5".to_string(),
            vendor_id: "demo-vendor-5".to_string(),
            title: "Carpenter - Custom Furniture".to_string(),
            description: "Join our custom furniture workshop! Work on bespoke pieces, repairs, and restoration projects. Must have experience with various wood types and finishing techniques.".to_string(),
            work_type: "Carpentry".to_string(),
            required_skills: strings(&["Carpentry", "Custom Furniture", "Wood Working", "Finishing", "Design Skills"]),
            pay_min: 1000,
            pay_max: 1500,
            location: "Chennai, Tamil Nadu".to_string(),
            hours: 8,
            status: "open".to_string(),
            created_at: ts(2024, 1, 6, 16, 20),
            updated_at: ts(2024, 1, 6, 16, 20),
            origin: Origin::Demo,
        },
    ]
}

pub fn demo_applications() -> Vec<JobApplication> {
    vec![
        JobApplication {
            id: "demo-app-1".to_string(),
            job_id: "demo-job-1".to_string(),
            worker_id: "demo-worker-1".to_string(),
            status: "pending".to_string(),
            applied_at: ts(2024, 1, 15, 9, 0),
            accepted_at: None,
            origin: Origin::Demo,
        },
        JobApplication {
            id: "demo-app-2".to_string(),
            job_id: "demo-job-2".to_string(),
            worker_id: "demo-worker-2".to_string(),
            status: "accepted".to_string(),
            applied_at: ts(2024, 1, 14, 11, 30),
            accepted_at: Some(ts(2024, 1, 14, 15, 0)),
            origin: Origin::Demo,
        },
        JobApplication {
            id: "demo-app-3".to_string(),
            job_id: "demo-job-3".to_string(),
            worker_id: "demo-worker-3".to_string(),
            status: "rejected".to_string(),
            applied_at: ts(2024, 1, 13, 14, 15),
            accepted_at: None,
            origin: Origin::Demo,
        },
    ]
}

pub fn demo_job_requests() -> Vec<JobRequest> {
    vec![
        JobRequest {
            id: "demo-request-1".to_string(),
            worker_id: "demo-worker-1".to_string(),
            title: "Plumber for Kitchen Sink Repair".to_string(),
            description: "Need an experienced plumber to fix a leaking kitchen sink. The faucet has been dripping for days and the drain is clogged. Looking for someone who can come today or tomorrow.".to_string(),
            hours: 2,
            min_pay: 800,
            max_pay: 1200,
            skills: strings(&["Plumbing", "Kitchen Repair", "Drain Cleaning", "Faucet Repair"]),
            location: "Mumbai, Maharashtra".to_string(),
            urgency: "high".to_string(),
            status: "pending".to_string(),
            accepted_by: None,
            created_at: ts(2024, 1, 15, 10, 30),
            accepted_at: None,
            origin: Origin::Demo,
        },
        JobRequest {
            id: "demo-request-2".to_string(),
            worker_id: "demo-worker-2".to_string(),
            title: "Swiggy Delivery Partner".to_string(),
            description: "Looking for delivery work in the evening hours. Have my own two-wheeler and valid driving license. Can work 4-6 hours daily from 6 PM to 10 PM.".to_string(),
            hours: 4,
            min_pay: 300,
            max_pay: 500,
            skills: strings(&["Delivery", "Two-wheeler Driving", "Customer Service", "Time Management"]),
            location: "Delhi, NCR".to_string(),
            urgency: "medium".to_string(),
            status: "accepted".to_string(),
            accepted_by: Some("demo-vendor-1".to_string()),
            created_at: ts(2024, 1, 14, 15, 45),
            accepted_at: Some(ts(2024, 1, 14, 16, 30)),
            origin: Origin::Demo,
        },
        JobRequest {
            id: "demo-request-3".to_string(),
            worker_id: "demo-worker-3".to_string(),
            title: "Home Cleaning Service".to_string(),
            description: "Need a reliable cleaner for weekly house cleaning. 2BHK apartment, includes dusting, mopping, bathroom cleaning, and kitchen maintenance. Looking for someone trustworthy and punctual.".to_string(),
            hours: 3,
            min_pay: 400,
            max_pay: 600,
            skills: strings(&["House Cleaning", "Dusting", "Mopping", "Bathroom Cleaning", "Kitchen Cleaning"]),
            location: "Bangalore, Karnataka".to_string(),
            urgency: "low".to_string(),
            status: "pending".to_string(),
            accepted_by: None,
            created_at: ts(2024, 1, 13, 9, 20),
            accepted_at: None,
            origin: Origin::Demo,
        },
        JobRequest {
            id: "demo-request-4".to_string(),
            worker_id: "demo-worker-4".to_string(),
            title: "Electrician for Wiring Issues".to_string(),
            description: "House has electrical problems - some switches not working, lights flickering. Need a licensed electrician to diagnose and fix the issues. Safety is priority.".to_string(),
            hours: 4,
            min_pay: 1000,
            max_pay: 1500,
            skills: strings(&["Electrical Work", "Wiring", "Switch Repair", "Safety Compliance", "Troubleshooting"]),
            location: "Pune, Maharashtra".to_string(),
            urgency: "high".to_string(),
            status: "pending".to_string(),
            accepted_by: None,
            created_at: ts(2024, 1, 12, 14, 15),
            accepted_at: None,
            origin: Origin::Demo,
        },
        JobRequest {
            id: "demo-request-5".to_string(),
            worker_id: "demo-worker-5".to_string(),
            title: "Carpenter for Furniture Repair".to_string(),
            description: "Have a wooden dining table that needs repair - legs are loose and surface has scratches. Looking for a skilled carpenter who can restore it to good condition.".to_string(),
            hours: 6,
            min_pay: 1200,
            max_pay: 1800,
            skills: strings(&["Carpentry", "Furniture Repair", "Wood Working", "Sanding", "Varnishing"]),
            location: "Chennai, Tamil Nadu".to_string(),
            urgency: "medium".to_string(),
            status: "accepted".to_string(),
            accepted_by: Some("demo-vendor-2".to_string()),
            created_at: ts(2024, 1, 11, 11, 30),
            accepted_at: Some(ts(2024, 1, 11, 14, 15)),
            origin: Origin::Demo,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_are_demo_origin() {
        assert!(demo_job_postings().iter().all(|j| j.origin.is_demo()));
        assert!(demo_applications().iter().all(|a| a.origin.is_demo()));
        assert!(demo_job_requests().iter().all(|r| r.origin.is_demo()));
    }

    #[test]
    fn test_fixture_pay_ranges_are_ordered() {
        for job in demo_job_postings() {
            assert!(job.pay_min <= job.pay_max, "{}", job.id);
        }
        for request in demo_job_requests() {
            assert!(request.min_pay <= request.max_pay, "{}", request.id);
        }
    }

    #[test]
    fn test_accepted_fixtures_carry_acceptance_details() {
        for request in demo_job_requests() {
            if request.status == "accepted" {
                assert!(request.accepted_by.is_some(), "{}", request.id);
                assert!(request.accepted_at.is_some(), "{}", request.id);
            }
        }
    }
}
