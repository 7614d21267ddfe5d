mod api_races_router;
mod api_routing_fallback;
