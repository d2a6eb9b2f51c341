//! Built-in catalog used until a catalog file exists.

use serde_json::json;

/// Seed rows in the backend row shape.
pub fn seed_rows() -> serde_json::Value {
    json!([
        {
            "id": "1",
            "name": "Manam Comfort Filipino",
            "cuisine": "Filipino",
            "image": "https://images.unsplash.com/photo-1565299624946-b28f40a0ae38",
            "rating": 4.6,
            "price_range": "$$",
            "price_min": 250,
            "price_max": 600,
            "distance": 1.2,
            "description": "House crispy sisig and watermelon sinigang in a bright, busy dining room.",
            "address": "Greenbelt 2, Ayala Center, Makati",
            "latitude": 14.5526,
            "longitude": 121.0213,
            "tags": ["Filipino", "Savory", "Sour", "Family Meal"]
        },
        {
            "id": "2",
            "name": "Mama Lou's Italian Kitchen",
            "cuisine": "Italian",
            "image": "https://images.unsplash.com/photo-1513104890138-7c749659a591",
            "rating": 4.5,
            "price_range": "$$$",
            "price_min": 450,
            "price_max": 1200,
            "distance": 3.4,
            "description": "Wood-fired pizza and fresh pasta; Pizza Night every Thursday.",
            "address": "Serendra, Bonifacio Global City, Taguig",
            "latitude": 14.5493,
            "longitude": 121.0555,
            "tags": ["Italian", "Pizza", "Date Night", "Savory"]
        },
        {
            "id": "3",
            "name": "Ramen Nagi",
            "cuisine": "Japanese",
            "image": "https://images.unsplash.com/photo-1569718212165-3a8278d5f624",
            "rating": 4.7,
            "price_range": "$$",
            "price_min": 380,
            "price_max": 550,
            "distance": 2.1,
            "description": "Customizable tonkotsu ramen with a fiery red king option.",
            "address": "SM Aura Premier, Taguig",
            "latitude": 14.5458,
            "longitude": 121.0543,
            "tags": ["Japanese", "Ramen", "Umami", "Spicy"]
        },
        {
            "id": "4",
            "name": "Lugaw Republic",
            "cuisine": "Filipino",
            "image": "https://images.unsplash.com/photo-1547592180-85f173990554",
            "rating": 4.2,
            "price_range": "$",
            "price_min": 60,
            "price_max": 180,
            "distance": 0.6,
            "description": "Rice porridge with tokwa't baboy, open late for the night crowd.",
            "address": "Kalayaan Ave, Poblacion, Makati",
            "latitude": 14.5649,
            "longitude": 121.0301,
            "tags": ["Filipino", "Breakfast", "Late Night", "Quick Bite"]
        },
        {
            "id": "5",
            "name": "Samgyupsalamat",
            "cuisine": "Korean",
            "image": "https://images.unsplash.com/photo-1590301157890-4810ed352733",
            "rating": 4.3,
            "price_range": "$$",
            "price_min": 399,
            "price_max": 599,
            "distance": 4.8,
            "description": "Unlimited Korean barbecue grilled at the table.",
            "address": "Maginhawa St, Quezon City",
            "latitude": 14.6466,
            "longitude": 121.0607,
            "tags": ["Korean", "BBQ", "Smoky", "Family Meal"]
        },
        {
            "id": "6",
            "name": "Wildflour Cafe + Bakery",
            "cuisine": "Bakery",
            "image": "https://images.unsplash.com/photo-1509440159596-0249088772ff",
            "rating": 4.4,
            "price_range": "$$$",
            "price_min": 350,
            "price_max": 1100,
            "distance": 2.9,
            "description": "All-day brunch, sourdough and the famous kouign-amann.",
            "address": "Net Lima Building, BGC, Taguig",
            "latitude": 14.5508,
            "longitude": 121.0497,
            "tags": ["Brunch", "Dessert", "Coffee & Tea", "Sweet"]
        },
        {
            "id": "7",
            "name": "Gallery by Chele",
            "cuisine": "Contemporary",
            "image": "https://images.unsplash.com/photo-1414235077428-338989a2e8c0",
            "rating": 4.8,
            "price_range": "$$$$",
            "price_min": 1000,
            "price_max": 2000,
            "distance": 3.7,
            "description": "Tasting menu exploring Philippine produce with Spanish technique.",
            "address": "5th Ave, Bonifacio Global City, Taguig",
            "latitude": 14.5537,
            "longitude": 121.0469,
            "tags": ["Fine Dining", "Date Night", "Umami"]
        },
        {
            "id": "8",
            "name": "Green Bar",
            "cuisine": "Vegan",
            "image": "https://images.unsplash.com/photo-1512621776951-a57141f2eefd",
            "rating": 4.3,
            "price_range": "$$",
            "price_min": 200,
            "price_max": 450,
            "distance": 1.5,
            "description": "Plant-based burgers, bowls and smoothies.",
            "address": "Legaspi Village, Makati",
            "latitude": 14.5563,
            "longitude": 121.0164,
            "tags": ["Vegan", "Vegetarian", "Healthy", "Lunch"]
        }
    ])
}
