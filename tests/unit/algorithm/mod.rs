mod occupancy;
